use crate::catalog::CATEGORIES;

pub fn render_index(date: &str, habit_count: usize) -> String {
    let options: String = CATEGORIES
        .iter()
        .map(|category| format!("<option value=\"{category}\">{category}</option>"))
        .collect();
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{COUNT}}", &habit_count.to_string())
        .replace("{{CATEGORY_OPTIONS}}", &options)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef6f1;
      --bg-2: #bfe3cf;
      --ink: #23312a;
      --accent: #2f9e6e;
      --accent-2: #2f4858;
      --danger: #d9534f;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(47, 88, 72, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e2f3e9 60%, #f2f8f1 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(920px, 100%);
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
      color: #5a6b60;
      font-size: 1rem;
    }

    form.add {
      display: grid;
      grid-template-columns: 2fr 1fr 1fr auto;
      gap: 12px;
      align-items: end;
    }

    form.add label {
      display: grid;
      gap: 4px;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #5a6b60;
    }

    input, select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.18);
      background: white;
    }

    button {
      font: inherit;
      font-weight: 600;
      border: none;
      border-radius: 12px;
      padding: 10px 18px;
      cursor: pointer;
      background: var(--accent);
      color: white;
      transition: transform 120ms ease, opacity 120ms ease;
    }

    button:hover {
      transform: translateY(-1px);
      opacity: 0.92;
    }

    button.ghost {
      background: transparent;
      color: var(--accent-2);
      border: 1px solid rgba(47, 72, 88, 0.25);
    }

    button.danger {
      background: var(--danger);
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: center;
      justify-content: space-between;
    }

    .toolbar .group {
      display: flex;
      gap: 10px;
      align-items: center;
    }

    .toolbar .permission {
      font-size: 0.9rem;
      color: #5a6b60;
    }

    .habit {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .habit .title-row {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      gap: 12px;
    }

    .habit h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .chip {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      background: rgba(47, 158, 110, 0.12);
      color: var(--accent);
      border-radius: 999px;
      padding: 4px 10px;
    }

    .badges {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .badge {
      font-size: 0.8rem;
      background: #f4c84c;
      color: #5a4500;
      border-radius: 999px;
      padding: 4px 10px;
    }

    .meter {
      background: #e8efe9;
      border-radius: 999px;
      height: 10px;
      overflow: hidden;
    }

    .meter .fill {
      height: 100%;
      background: var(--accent);
      border-radius: 999px;
      transition: width 300ms ease;
    }

    .stats-row {
      display: flex;
      gap: 18px;
      font-size: 0.9rem;
      color: #5a6b60;
    }

    .week {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
      text-align: center;
    }

    .week .head {
      font-size: 0.75rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: #5a6b60;
    }

    .day {
      min-height: 44px;
      border-radius: 12px;
      background: #e8efe9;
      border: none;
      color: var(--ink);
      font-size: 0.8rem;
      padding: 6px 2px;
    }

    .day.done {
      background: var(--accent);
      color: white;
    }

    .day.today {
      outline: 2px solid var(--accent-2);
    }

    .empty {
      text-align: center;
      color: #5a6b60;
      padding: 24px 0;
    }

    .toast {
      position: fixed;
      bottom: 24px;
      left: 50%;
      transform: translateX(-50%);
      background: var(--accent-2);
      color: white;
      border-radius: 12px;
      padding: 12px 20px;
      opacity: 0;
      pointer-events: none;
      transition: opacity 250ms ease;
    }

    .toast.show {
      opacity: 1;
    }

    @keyframes rise {
      from {
        transform: translateY(16px);
        opacity: 0;
      }
      to {
        transform: translateY(0);
        opacity: 1;
      }
    }

    @media (max-width: 700px) {
      form.add {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Habit Tracker</h1>
      <p class="subtitle">{{DATE}} &middot; {{COUNT}} habits tracked &middot; in-memory only, gone on restart</p>
    </header>

    <form class="add" id="add-form">
      <label>Habit name
        <input type="text" id="habit-name" placeholder="Code daily" required />
      </label>
      <label>Category
        <select id="habit-category">{{CATEGORY_OPTIONS}}</select>
      </label>
      <label>Reminder
        <input type="time" id="habit-reminder" />
      </label>
      <button type="submit">Add Habit</button>
    </form>

    <div class="toolbar">
      <div class="group">
        <button class="ghost" id="prev-week" type="button">&larr; Prev week</button>
        <button class="ghost" id="next-week" type="button">Next week &rarr;</button>
      </div>
      <div class="group">
        <span class="permission" id="permission-label"></span>
        <button class="ghost" id="permission-grant" type="button">Enable reminders</button>
        <button class="ghost" id="permission-deny" type="button">Disable</button>
      </div>
      <div class="group">
        <a href="/api/export/csv" download><button class="ghost" type="button">Export CSV</button></a>
        <a href="/api/export/json" download><button class="ghost" type="button">Export JSON</button></a>
      </div>
    </div>

    <section id="habit-list"></section>
  </main>

  <div class="toast" id="toast"></div>

  <script>
    const DAY_MS = 24 * 60 * 60 * 1000;
    const state = { habits: [], catalog: [], weekOffset: 0, permission: 'default' };

    function isoDate(date) {
      const pad = (n) => String(n).padStart(2, '0');
      return `${date.getFullYear()}-${pad(date.getMonth() + 1)}-${pad(date.getDate())}`;
    }

    function weekDays() {
      const today = new Date();
      today.setHours(0, 0, 0, 0);
      const start = new Date(today.getTime() - today.getDay() * DAY_MS + state.weekOffset * 7 * DAY_MS);
      return Array.from({ length: 7 }, (_, i) => new Date(start.getTime() + i * DAY_MS));
    }

    function badgeLabel(id) {
      const def = state.catalog.find((a) => a.id === id);
      return def ? def.name : id;
    }

    async function fetchJson(url, options) {
      const resp = await fetch(url, options);
      if (!resp.ok) throw new Error(await resp.text());
      if (resp.status === 204 || resp.status === 202) return null;
      return resp.json();
    }

    function showToast(message) {
      const toast = document.getElementById('toast');
      toast.textContent = message;
      toast.classList.add('show');
      setTimeout(() => toast.classList.remove('show'), 3500);
    }

    function render() {
      const list = document.getElementById('habit-list');
      const todayStr = isoDate(new Date());
      const days = weekDays();
      list.innerHTML = '';

      if (!state.habits.length) {
        list.innerHTML = '<p class="empty">No habits yet. Add one above to start a streak.</p>';
        return;
      }

      for (const habit of state.habits) {
        const card = document.createElement('div');
        card.className = 'habit';

        const completed = new Set(habit.completions);
        const width = Math.min((habit.streak / 30) * 100, 100);
        const badges = habit.achievements
          .map((id) => `<span class="badge">${badgeLabel(id)}</span>`)
          .join('');

        card.innerHTML = `
          <div class="title-row">
            <h2>${habit.name}</h2>
            <span class="chip">${habit.category}</span>
          </div>
          <div class="badges">${badges}</div>
          <div class="stats-row">
            <span>Streak: <strong>${habit.streak}</strong></span>
            <span>Avg: <strong>${habit.average_per_week.toFixed(1)}</strong> days/week</span>
            <span>Total: <strong>${habit.completions.length}</strong></span>
            ${habit.reminder_time ? `<span>Reminder: <strong>${habit.reminder_time}</strong></span>` : ''}
          </div>
          <div class="meter"><div class="fill" style="width:${width}%"></div></div>
          <div class="week">
            ${days.map((d) => `<span class="head">${d.toLocaleDateString(undefined, { weekday: 'short' })}</span>`).join('')}
            ${days
              .map((d) => {
                const key = isoDate(d);
                const classes = ['day'];
                if (completed.has(key)) classes.push('done');
                if (key === todayStr) classes.push('today');
                return `<button type="button" class="${classes.join(' ')}" data-habit="${habit.id}" data-date="${key}">${d.getDate()}</button>`;
              })
              .join('')}
          </div>
          <div><button class="danger" type="button" data-delete="${habit.id}">Delete</button></div>
        `;
        list.appendChild(card);
      }
    }

    async function refresh() {
      state.habits = await fetchJson('/api/habits');
      render();
    }

    async function toggle(habitId, date) {
      const result = await fetchJson(`/api/habits/${habitId}/toggle`, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ date }),
      });
      if (result.new_unlocked.length) {
        showToast(`Unlocked: ${result.new_unlocked.map(badgeLabel).join(', ')}`);
      }
      await refresh();
      await syncReminders();
    }

    // Replace-all post to the background scheduler: every call ships the
    // full entry list for habits with a reminder still pending today.
    async function syncReminders() {
      if (state.permission !== 'granted') return;
      const todayStr = isoDate(new Date());
      const entries = state.habits
        .filter((h) => h.reminder_time && !h.completions.includes(todayStr))
        .map((h) => {
          const [hours, minutes] = h.reminder_time.split(':').map(Number);
          const due = new Date();
          due.setHours(hours, minutes, 0, 0);
          return {
            id: h.id,
            due_at_ms: due.getTime(),
            title: `Habit Reminder: ${h.name}`,
            body: 'Time to complete your habit!',
          };
        });
      try {
        await fetchJson('/api/reminders', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(entries),
        });
      } catch (err) {
        console.warn('reminder sync failed', err);
      }
    }

    async function setPermission(permission) {
      const result = await fetchJson('/api/notifications/permission', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ permission }),
      });
      state.permission = result.permission;
      renderPermission();
      await syncReminders();
    }

    function renderPermission() {
      document.getElementById('permission-label').textContent = `Notifications: ${state.permission}`;
    }

    document.getElementById('add-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const name = document.getElementById('habit-name').value;
      const category = document.getElementById('habit-category').value;
      const reminder = document.getElementById('habit-reminder').value;
      try {
        await fetchJson('/api/habits', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ name, category, reminder_time: reminder || null }),
        });
        document.getElementById('habit-name').value = '';
        document.getElementById('habit-reminder').value = '';
        await refresh();
        await syncReminders();
      } catch (err) {
        alert(err.message);
      }
    });

    document.getElementById('habit-list').addEventListener('click', async (event) => {
      const target = event.target;
      if (target.dataset.habit) {
        await toggle(Number(target.dataset.habit), target.dataset.date);
      } else if (target.dataset.delete) {
        await fetchJson(`/api/habits/${target.dataset.delete}`, { method: 'DELETE' });
        await refresh();
        await syncReminders();
      }
    });

    document.getElementById('prev-week').addEventListener('click', () => {
      state.weekOffset -= 1;
      render();
    });

    document.getElementById('next-week').addEventListener('click', () => {
      state.weekOffset += 1;
      render();
    });

    document.getElementById('permission-grant').addEventListener('click', () => setPermission('granted'));
    document.getElementById('permission-deny').addEventListener('click', () => setPermission('denied'));

    async function init() {
      state.catalog = await fetchJson('/api/achievements');
      const permission = await fetchJson('/api/notifications/permission');
      state.permission = permission.permission;
      renderPermission();
      await refresh();
      await syncReminders();
    }

    init().catch((err) => console.error(err));
  </script>
</body>
</html>
"#;
