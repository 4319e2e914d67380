use crate::models::DayRecord;

pub fn render_index(date: &str, record: &DayRecord) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{MORNING}}", &escape_attr(&record.morning))
        .replace("{{EVENING}}", &escape_attr(&record.evening))
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weight Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --good: #2d7a4b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      justify-self: start;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
      box-shadow: none;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .calendar-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .calendar-header h2 {
      margin: 0;
      font-size: 1.3rem;
      color: var(--accent-2);
    }

    .step {
      appearance: none;
      border: none;
      border-radius: 999px;
      width: 42px;
      height: 42px;
      font-size: 1.1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
      transition: transform 150ms ease, opacity 150ms ease;
    }

    .step:active {
      transform: scale(0.94);
    }

    .step:disabled {
      opacity: 0.35;
      cursor: not-allowed;
    }

    .weekdays,
    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
    }

    .weekdays span {
      text-align: center;
      font-size: 0.8rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
    }

    .day {
      appearance: none;
      border: 1px solid rgba(47, 72, 88, 0.08);
      border-radius: 14px;
      padding: 12px 0;
      font-size: 0.95rem;
      font-weight: 500;
      background: white;
      color: var(--ink);
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    .day:not(:disabled):hover {
      transform: translateY(-2px);
      box-shadow: 0 10px 20px rgba(47, 72, 88, 0.14);
    }

    .day.outside {
      color: #b6afa6;
    }

    .day.today {
      border-color: var(--accent);
      color: var(--accent);
      font-weight: 600;
    }

    .day.completed {
      background: var(--good);
      border-color: var(--good);
      color: white;
    }

    .day.selected {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
      font-weight: 600;
    }

    .day:disabled {
      background: rgba(47, 72, 88, 0.05);
      color: #c3bcb2;
      cursor: not-allowed;
    }

    .tracking h2 {
      margin: 0 0 14px;
      font-size: 1.15rem;
      color: var(--accent-2);
    }

    .inputs {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .field {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .field label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .field input {
      border: 1px solid rgba(47, 72, 88, 0.18);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1.1rem;
      font-family: inherit;
      color: var(--accent-2);
      width: 100%;
    }

    .field input:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 18px;
      overflow: hidden;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    th {
      text-align: left;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
      background: rgba(47, 72, 88, 0.06);
      padding: 12px 16px;
    }

    td {
      padding: 12px 16px;
      font-size: 0.95rem;
      border-top: 1px solid rgba(47, 72, 88, 0.06);
    }

    td.up {
      color: #c63b2b;
    }

    td.down {
      color: var(--good);
    }

    .empty {
      text-align: center;
      color: #8b857d;
      padding: 28px 16px;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: var(--good);
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    [hidden] {
      display: none !important;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .day {
        padding: 9px 0;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Weight Tracker</h1>
      <p class="subtitle">Log morning and evening weigh-ins per day, then watch the weekly trend.</p>
    </header>

    <div class="tabs" role="tablist">
      <button class="tab active" type="button" data-mode="entry" role="tab" aria-selected="true">Enter Data</button>
      <button class="tab" type="button" data-mode="averages" role="tab" aria-selected="false">Weekly Averages</button>
    </div>

    <section id="entry-section">
      <div class="calendar-header">
        <button class="step" id="prev-month" type="button" aria-label="Previous month">&lt;</button>
        <h2 id="month-label">&nbsp;</h2>
        <button class="step" id="next-month" type="button" aria-label="Next month">&gt;</button>
      </div>
      <div class="weekdays" style="margin-top: 16px;">
        <span>Sun</span><span>Mon</span><span>Tue</span><span>Wed</span><span>Thu</span><span>Fri</span><span>Sat</span>
      </div>
      <div class="grid" id="calendar-grid" style="margin-top: 8px;"></div>

      <div class="tracking" style="margin-top: 24px;">
        <h2 id="tracking-label">Tracking for {{DATE}}</h2>
        <div class="inputs">
          <div class="field">
            <label for="morning-weight">Morning Weight (lbs)</label>
            <input type="number" step="0.1" id="morning-weight" placeholder="e.g., 180.5" value="{{MORNING}}" />
          </div>
          <div class="field">
            <label for="evening-weight">Evening Weight (lbs)</label>
            <input type="number" step="0.1" id="evening-weight" placeholder="e.g., 181.2" value="{{EVENING}}" />
          </div>
        </div>
      </div>
    </section>

    <section id="averages-section" hidden>
      <table>
        <thead>
          <tr>
            <th>Week</th>
            <th>Morning Avg (lbs)</th>
            <th>Change</th>
            <th>Evening Avg (lbs)</th>
            <th>Change</th>
          </tr>
        </thead>
        <tbody id="averages-body"></tbody>
      </table>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Days turn green once both weigh-ins are in. Weeks run Sunday to Saturday; the report shows the newest week first.</p>
  </main>

  <script>
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const entrySection = document.getElementById('entry-section');
    const averagesSection = document.getElementById('averages-section');
    const monthLabelEl = document.getElementById('month-label');
    const prevBtn = document.getElementById('prev-month');
    const nextBtn = document.getElementById('next-month');
    const gridEl = document.getElementById('calendar-grid');
    const trackingLabelEl = document.getElementById('tracking-label');
    const morningEl = document.getElementById('morning-weight');
    const eveningEl = document.getElementById('evening-weight');
    const averagesBodyEl = document.getElementById('averages-body');
    const statusEl = document.getElementById('status');

    const state = {
      mode: 'entry',
      selectedDate: '{{DATE}}',
      displayedMonth: '{{DATE}}'.slice(0, 7),
    };

    let monthData = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const longDate = (iso) => {
      const [year, month, day] = iso.split('-').map(Number);
      return new Date(year, month - 1, day).toLocaleDateString('en-US', {
        weekday: 'long',
        year: 'numeric',
        month: 'long',
        day: 'numeric'
      });
    };

    const setMode = (mode) => {
      state.mode = mode;
      tabs.forEach((button) => {
        const isActive = button.dataset.mode === mode;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      entrySection.hidden = mode !== 'entry';
      averagesSection.hidden = mode !== 'averages';
      if (mode === 'averages') {
        loadAverages().catch((err) => setStatus(err.message, 'error'));
      }
    };

    const stepMonth = (delta) => {
      const [year, month] = state.displayedMonth.split('-').map(Number);
      const next = new Date(year, month - 1 + delta, 1);
      const pad = String(next.getMonth() + 1).padStart(2, '0');
      state.displayedMonth = next.getFullYear() + '-' + pad;
      loadMonth().catch((err) => setStatus(err.message, 'error'));
    };

    const selectDate = (date) => {
      state.selectedDate = date;
      renderCalendar();
      loadDay().catch((err) => setStatus(err.message, 'error'));
    };

    const renderCalendar = () => {
      if (!monthData) {
        return;
      }
      monthLabelEl.textContent = monthData.label;
      prevBtn.disabled = !monthData.can_step_back;
      nextBtn.disabled = !monthData.can_step_forward;

      gridEl.innerHTML = '';
      monthData.days.forEach((day) => {
        const button = document.createElement('button');
        button.type = 'button';
        button.className = 'day';
        button.textContent = day.day;
        if (!day.in_month) {
          button.classList.add('outside');
        }
        if (day.completed) {
          button.classList.add('completed');
        }
        if (day.today) {
          button.classList.add('today');
        }
        if (day.date === state.selectedDate) {
          button.classList.add('selected');
        }
        button.disabled = !day.selectable;
        button.addEventListener('click', () => selectDate(day.date));
        gridEl.appendChild(button);
      });
    };

    const renderAverages = (report) => {
      averagesBodyEl.innerHTML = '';
      if (!report.weeks.length) {
        const row = document.createElement('tr');
        const cell = document.createElement('td');
        cell.className = 'empty';
        cell.colSpan = 5;
        cell.textContent = 'No weigh-ins recorded yet.';
        row.appendChild(cell);
        averagesBodyEl.appendChild(row);
        return;
      }

      const diffCell = (diff) => {
        const cell = document.createElement('td');
        if (diff === undefined || diff === null) {
          cell.textContent = '-';
          return cell;
        }
        cell.textContent = (diff > 0 ? '+' : '') + diff.toFixed(2);
        if (diff > 0) {
          cell.className = 'up';
        } else if (diff < 0) {
          cell.className = 'down';
        }
        return cell;
      };

      report.weeks.slice().reverse().forEach((week) => {
        const row = document.createElement('tr');
        const label = document.createElement('td');
        label.textContent = week.label;
        const morning = document.createElement('td');
        morning.textContent = week.morning_average.toFixed(2);
        const evening = document.createElement('td');
        evening.textContent = week.evening_average.toFixed(2);
        row.appendChild(label);
        row.appendChild(morning);
        row.appendChild(diffCell(week.morning_diff));
        row.appendChild(evening);
        row.appendChild(diffCell(week.evening_diff));
        averagesBodyEl.appendChild(row);
      });
    };

    const loadMonth = async () => {
      const res = await fetch('/api/month/' + state.displayedMonth);
      if (!res.ok) {
        throw new Error('Unable to load calendar');
      }
      monthData = await res.json();
      renderCalendar();
    };

    const loadDay = async () => {
      const res = await fetch('/api/day/' + state.selectedDate);
      if (!res.ok) {
        throw new Error('Unable to load day');
      }
      const day = await res.json();
      trackingLabelEl.textContent = 'Tracking for ' + longDate(day.date);
      morningEl.value = day.morning;
      eveningEl.value = day.evening;
    };

    const save = async (field, value) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/day/' + state.selectedDate, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ field, value })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      await res.json();
      loadMonth().catch((err) => setStatus(err.message, 'error'));
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setMode(button.dataset.mode));
    });

    prevBtn.addEventListener('click', () => stepMonth(-1));
    nextBtn.addEventListener('click', () => stepMonth(1));

    morningEl.addEventListener('change', () => {
      save('morning', morningEl.value).catch((err) => setStatus(err.message, 'error'));
    });
    eveningEl.addEventListener('change', () => {
      save('evening', eveningEl.value).catch((err) => setStatus(err.message, 'error'));
    });

    trackingLabelEl.textContent = 'Tracking for ' + longDate(state.selectedDate);
    loadMonth().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
