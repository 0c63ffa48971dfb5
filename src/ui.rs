use crate::models::AppData;

pub fn render_index(data: &AppData) -> String {
    let theme = if data.settings.is_dark() {
        "theme-dark"
    } else {
        "theme-light"
    };
    let greeting = match data.profile.username.as_deref() {
        Some(name) => format!("Welcome back, {}", escape_html(name)),
        None => "Welcome".to_string(),
    };
    INDEX_HTML
        .replace("{{THEME}}", theme)
        .replace("{{GREETING}}", &greeting)
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>FitTrack</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef7f1;
      --bg-2: #bfe8d2;
      --ink: #21302a;
      --muted: #5d6f66;
      --accent: #18a05e;
      --accent-2: #1f5f8b;
      --warn: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --card-solid: #ffffff;
      --edge: rgba(31, 95, 139, 0.1);
      --shadow: 0 24px 60px rgba(31, 95, 139, 0.16);
    }

    body.theme-dark {
      --bg-1: #15211c;
      --bg-2: #0e3a28;
      --ink: #e6f2ea;
      --muted: #9db4a8;
      --accent: #35c77f;
      --accent-2: #58a6d6;
      --card: rgba(24, 38, 32, 0.92);
      --card-solid: #1d2d26;
      --edge: rgba(88, 166, 214, 0.14);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.4);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-1) 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
      transition: background 300ms ease, color 300ms ease;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 1rem;
    }

    nav {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      padding: 6px;
      background: var(--edge);
      border-radius: 999px;
    }

    .nav-link {
      text-decoration: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      color: var(--muted);
    }

    .nav-link.active {
      background: var(--card-solid);
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(31, 95, 139, 0.12);
    }

    .section {
      display: none;
      gap: 20px;
    }

    .section.active {
      display: grid;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: var(--card-solid);
      border-radius: 18px;
      padding: 18px;
      border: 1px solid var(--edge);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.big {
      font-size: 2.6rem;
      color: var(--accent);
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(24, 160, 94, 0.3);
    }

    .btn-secondary {
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(31, 95, 139, 0.3);
    }

    .btn-ghost {
      background: transparent;
      color: var(--muted);
      border: 1px solid var(--edge);
    }

    .progress-track {
      background: var(--edge);
      border-radius: 999px;
      height: 14px;
      overflow: hidden;
    }

    .progress-fill {
      background: var(--accent);
      height: 100%;
      width: 0%;
      border-radius: 999px;
      transition: width 300ms ease;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--warn);
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }

    .week-chart {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 10px;
      align-items: end;
      height: 220px;
      padding: 16px;
      background: var(--card-solid);
      border: 1px solid var(--edge);
      border-radius: 20px;
    }

    .bar-col {
      display: grid;
      grid-template-rows: 1fr auto auto;
      align-items: end;
      justify-items: center;
      gap: 6px;
      height: 100%;
    }

    .bar {
      width: 70%;
      min-height: 3px;
      background: var(--accent-2);
      border-radius: 8px 8px 0 0;
      align-self: end;
    }

    .bar-col.today .bar {
      background: var(--accent);
    }

    .bar-label {
      font-size: 0.75rem;
      color: var(--muted);
    }

    .bar-col.today .bar-label {
      color: var(--accent);
      font-weight: 600;
    }

    .bar-value {
      font-size: 0.7rem;
      color: var(--muted);
    }

    .glasses {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .glass {
      width: 34px;
      height: 44px;
      border-radius: 6px 6px 12px 12px;
      border: 2px solid var(--accent-2);
      background: transparent;
      transition: background 200ms ease;
    }

    .glass.full {
      background: var(--accent-2);
    }

    .quote-card {
      background: var(--card-solid);
      border: 1px solid var(--edge);
      border-radius: 20px;
      padding: 28px;
      display: grid;
      gap: 12px;
    }

    .quote-text {
      font-family: "Fraunces", "Georgia", serif;
      font-size: 1.3rem;
      margin: 0;
    }

    .quote-author {
      margin: 0;
      color: var(--muted);
    }

    form {
      display: grid;
      gap: 14px;
      max-width: 380px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    input[type="text"],
    input[type="number"] {
      font: inherit;
      padding: 12px 14px;
      border-radius: 12px;
      border: 1px solid var(--edge);
      background: var(--card-solid);
      color: var(--ink);
    }

    .toggle-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      background: var(--card-solid);
      border: 1px solid var(--edge);
      border-radius: 14px;
      padding: 14px 18px;
      max-width: 380px;
    }

    .toggle-row input {
      width: 20px;
      height: 20px;
      accent-color: var(--accent);
    }

    h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
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
        padding: 28px 20px;
      }
      .week-chart {
        height: 170px;
      }
    }
  </style>
</head>
<body class="{{THEME}}">
  <main class="app">
    <header>
      <h1>FitTrack</h1>
      <p class="subtitle">{{GREETING}}</p>
    </header>

    <nav id="nav">
      <a class="nav-link" href="#home" data-section="home">Home</a>
      <a class="nav-link" href="#steps" data-section="steps">Steps</a>
      <a class="nav-link" href="#weekly" data-section="weekly">Weekly</a>
      <a class="nav-link" href="#water" data-section="water">Water</a>
      <a class="nav-link" href="#distance" data-section="distance">Distance</a>
      <a class="nav-link" href="#quotes" data-section="quotes">Quotes</a>
      <a class="nav-link" href="#profile" data-section="profile">Profile</a>
      <a class="nav-link" href="#settings" data-section="settings">Settings</a>
    </nav>

    <section class="section" id="section-home">
      <h2>Today at a glance</h2>
      <div class="panel">
        <div class="stat">
          <span class="label">Steps</span>
          <span class="value" id="home-steps">0</span>
        </div>
        <div class="stat">
          <span class="label">Water</span>
          <span class="value" id="home-water">0 / 8</span>
        </div>
        <div class="stat">
          <span class="label">Streak</span>
          <span class="value" id="home-streak">0 days</span>
        </div>
      </div>
      <p class="hint">Open the Steps page and start tracking to count steps with your phone's motion sensor.</p>
    </section>

    <section class="section" id="section-steps">
      <h2>Step tracking</h2>
      <div class="panel">
        <div class="stat">
          <span class="label">Steps today</span>
          <span class="value big" id="steps-count">0</span>
        </div>
        <div class="stat">
          <span class="label">Calories</span>
          <span class="value" id="steps-calories">0 kcal</span>
        </div>
        <div class="stat">
          <span class="label">Distance</span>
          <span class="value" id="steps-distance">0.00 km</span>
        </div>
      </div>
      <div>
        <div class="progress-track"><div class="progress-fill" id="steps-progress"></div></div>
        <p class="hint" id="steps-goal-text">0 of 10000 steps</p>
      </div>
      <div class="actions">
        <button class="btn-primary" id="btn-track-start" type="button">Start Step Tracking</button>
        <button class="btn-secondary" id="btn-track-stop" type="button">Stop</button>
        <button class="btn-ghost" id="btn-steps-reset" type="button">Reset Today</button>
      </div>
      <div class="status" id="steps-status"></div>
    </section>

    <section class="section" id="section-weekly">
      <h2>This week</h2>
      <div class="week-chart" id="week-chart"></div>
      <div class="panel">
        <div class="stat">
          <span class="label">Streak</span>
          <span class="value" id="weekly-streak">0 days</span>
        </div>
      </div>
      <p class="hint">Days with at least 1000 steps keep the streak alive. Weeks run Monday to Sunday.</p>
    </section>

    <section class="section" id="section-water">
      <h2>Water intake</h2>
      <div class="panel">
        <div class="stat">
          <span class="value big" id="water-count">0 / 8</span>
          <span class="label">glasses today</span>
        </div>
      </div>
      <div class="glasses" id="water-glasses"></div>
      <div>
        <div class="progress-track"><div class="progress-fill" id="water-progress"></div></div>
      </div>
      <div class="actions">
        <button class="btn-primary" id="btn-water-add" type="button">Add Glass</button>
        <button class="btn-ghost" id="btn-water-reset" type="button">Reset</button>
      </div>
      <div class="status" id="water-status"></div>
    </section>

    <section class="section" id="section-distance">
      <h2>Walk distance</h2>
      <div class="panel">
        <div class="stat">
          <span class="label">Distance</span>
          <span class="value big" id="walk-distance">0.00 km</span>
        </div>
        <div class="stat">
          <span class="label">Duration</span>
          <span class="value" id="walk-duration">0:00</span>
        </div>
        <div class="stat">
          <span class="label">Avg speed</span>
          <span class="value" id="walk-speed">0.0 km/h</span>
        </div>
      </div>
      <div class="actions">
        <button class="btn-primary" id="btn-walk-start" type="button">Start Walk</button>
        <button class="btn-secondary" id="btn-walk-stop" type="button">Stop Walk</button>
      </div>
      <div class="status" id="walk-status"></div>
    </section>

    <section class="section" id="section-quotes">
      <h2>Daily motivation</h2>
      <div class="quote-card">
        <p class="quote-text" id="quote-text"></p>
        <p class="quote-author" id="quote-author"></p>
      </div>
      <div class="actions">
        <button class="btn-secondary" id="btn-quote-next" type="button">New Quote</button>
      </div>
    </section>

    <section class="section" id="section-profile">
      <h2>Profile</h2>
      <form id="profile-form">
        <label>Name
          <input type="text" id="profile-username" maxlength="30" placeholder="Your name" />
        </label>
        <label>Weight (kg)
          <input type="number" id="profile-weight" step="0.1" min="1" placeholder="70.0" />
        </label>
        <button class="btn-primary" type="submit">Save Profile</button>
      </form>
      <div class="status" id="profile-status"></div>
    </section>

    <section class="section" id="section-settings">
      <h2>Settings</h2>
      <div class="toggle-row">
        <span>Dark theme</span>
        <input type="checkbox" id="setting-theme" />
      </div>
      <div class="toggle-row">
        <span>Notifications</span>
        <input type="checkbox" id="setting-notifications" />
      </div>
      <div class="toggle-row">
        <span>Sound</span>
        <input type="checkbox" id="setting-sound" />
      </div>
      <div class="status" id="settings-status"></div>
    </section>
  </main>

  <script>
    const SECTIONS = ['home', 'steps', 'weekly', 'water', 'distance', 'quotes', 'profile', 'settings'];

    const el = (id) => document.getElementById(id);

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        let message = `Request failed (${res.status})`;
        try {
          const body = await res.json();
          if (body && body.error) {
            message = body.error;
          }
        } catch (err) {
          // non-JSON error body, keep the generic message
        }
        throw new Error(message);
      }
      return res.json();
    };

    const postJSON = (path, body) => api(path, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: body === undefined ? undefined : JSON.stringify(body)
    });

    const setStatus = (id, message, type) => {
      const node = el(id);
      node.textContent = message;
      node.dataset.type = type || '';
    };

    // --- section router ---

    const showSection = (name) => {
      const section = SECTIONS.includes(name) ? name : 'home';
      SECTIONS.forEach((candidate) => {
        el(`section-${candidate}`).classList.toggle('active', candidate === section);
      });
      document.querySelectorAll('.nav-link').forEach((link) => {
        link.classList.toggle('active', link.dataset.section === section);
      });
      loadSection(section);
    };

    const loadSection = (section) => {
      if (section === 'home') {
        loadHome();
      } else if (section === 'steps') {
        loadSteps();
      } else if (section === 'weekly') {
        loadStats();
      } else if (section === 'water') {
        loadWater();
      } else if (section === 'distance') {
        refreshWalk();
      } else if (section === 'quotes') {
        loadQuote();
      } else if (section === 'profile') {
        loadProfile();
      } else if (section === 'settings') {
        loadSettings();
      }
    };

    window.addEventListener('hashchange', () => {
      showSection(location.hash.replace('#', ''));
    });

    // --- steps ---

    let tracking = false;
    let sampleBuffer = [];
    let flushTimer = null;

    const applySteps = (data) => {
      el('steps-count').textContent = data.steps;
      el('steps-calories').textContent = `${data.calories} kcal`;
      el('steps-distance').textContent = `${data.distance_km.toFixed(2)} km`;
      el('steps-progress').style.width = `${data.goal_percent.toFixed(0)}%`;
      el('steps-goal-text').textContent = `${data.steps} of ${data.goal} steps`;
      el('home-steps').textContent = data.steps;
      setStatus('steps-status', data.tracking_status, tracking ? 'ok' : '');
    };

    const loadSteps = () => {
      api('/api/steps').then(applySteps).catch((err) => setStatus('steps-status', err.message, 'error'));
    };

    const onMotion = (event) => {
      const acc = event.accelerationIncludingGravity;
      if (!acc) {
        return;
      }
      sampleBuffer.push({
        x: acc.x || 0,
        y: acc.y || 0,
        z: acc.z || 0,
        timestamp_ms: Date.now()
      });
      if (sampleBuffer.length >= 12) {
        flushSamples();
      }
    };

    const flushSamples = () => {
      if (!sampleBuffer.length) {
        return;
      }
      const samples = sampleBuffer;
      sampleBuffer = [];
      postJSON('/api/motion/samples', { samples })
        .then((data) => applySteps(data.steps))
        .catch((err) => setStatus('steps-status', err.message, 'error'));
    };

    const reportCapability = (state) => postJSON('/api/motion/capability', { state }).then(applySteps);

    const startTracking = async () => {
      if (tracking) {
        return;
      }
      if (typeof DeviceMotionEvent === 'undefined') {
        await reportCapability('unavailable').catch(() => {});
        return;
      }
      if (typeof DeviceMotionEvent.requestPermission === 'function') {
        let outcome = 'denied';
        try {
          outcome = await DeviceMotionEvent.requestPermission();
        } catch (err) {
          outcome = 'denied';
        }
        if (outcome !== 'granted') {
          await reportCapability('denied').catch(() => {});
          return;
        }
      }
      tracking = true;
      await reportCapability('granted').catch(() => {});
      window.addEventListener('devicemotion', onMotion);
      flushTimer = setInterval(flushSamples, 600);
    };

    const stopTracking = () => {
      if (!tracking) {
        return;
      }
      tracking = false;
      window.removeEventListener('devicemotion', onMotion);
      clearInterval(flushTimer);
      flushTimer = null;
      flushSamples();
      loadSteps();
    };

    el('btn-track-start').addEventListener('click', () => {
      startTracking().catch((err) => setStatus('steps-status', err.message, 'error'));
    });
    el('btn-track-stop').addEventListener('click', stopTracking);
    el('btn-steps-reset').addEventListener('click', () => {
      postJSON('/api/steps/reset')
        .then(applySteps)
        .catch((err) => setStatus('steps-status', err.message, 'error'));
    });

    // --- weekly ---

    const loadStats = () => {
      api('/api/stats')
        .then((stats) => {
          el('weekly-streak').textContent = `${stats.streak_days} days`;
          el('home-streak').textContent = `${stats.streak_days} days`;
          const max = Math.max(10000, ...stats.week.map((day) => day.steps));
          el('week-chart').innerHTML = stats.week
            .map((day) => {
              const height = Math.max(2, Math.round((day.steps / max) * 100));
              const cls = day.is_today ? 'bar-col today' : 'bar-col';
              return `<div class="${cls}">
                <div class="bar" style="height: ${height}%"></div>
                <span class="bar-label">${day.weekday.slice(0, 3)}</span>
                <span class="bar-value">${day.steps}</span>
              </div>`;
            })
            .join('');
        })
        .catch(() => {});
    };

    // --- water ---

    const applyWater = (data) => {
      el('water-count').textContent = `${data.glasses} / ${data.goal}`;
      el('home-water').textContent = `${data.glasses} / ${data.goal}`;
      el('water-progress').style.width = `${data.percent.toFixed(0)}%`;
      const glasses = [];
      for (let i = 0; i < data.goal; i += 1) {
        glasses.push(`<div class="glass${i < data.glasses ? ' full' : ''}"></div>`);
      }
      el('water-glasses').innerHTML = glasses.join('');
      if (data.goal_reached) {
        setStatus('water-status', 'Daily water goal reached!', 'ok');
      } else {
        setStatus('water-status', '', '');
      }
    };

    const loadWater = () => {
      api('/api/water').then(applyWater).catch((err) => setStatus('water-status', err.message, 'error'));
    };

    el('btn-water-add').addEventListener('click', () => {
      postJSON('/api/water/add').then(applyWater).catch((err) => setStatus('water-status', err.message, 'error'));
    });
    el('btn-water-reset').addEventListener('click', () => {
      postJSON('/api/water/reset').then(applyWater).catch((err) => setStatus('water-status', err.message, 'error'));
    });

    // --- distance ---

    let watchId = null;
    let walkTimer = null;

    const formatDuration = (secs) => {
      const minutes = Math.floor(secs / 60);
      const seconds = secs % 60;
      return `${minutes}:${String(seconds).padStart(2, '0')}`;
    };

    const applyWalk = (data) => {
      el('walk-distance').textContent = `${data.distance_km.toFixed(2)} km`;
      el('walk-duration').textContent = formatDuration(data.duration_secs);
      el('walk-speed').textContent = `${data.avg_speed_kmh.toFixed(1)} km/h`;
      el('btn-walk-start').disabled = data.active;
      el('btn-walk-stop').disabled = !data.active;
    };

    const refreshWalk = () => {
      api('/api/distance').then(applyWalk).catch(() => {});
    };

    const onFix = (position) => {
      postJSON('/api/distance/fix', {
        latitude: position.coords.latitude,
        longitude: position.coords.longitude
      })
        .then(applyWalk)
        .catch((err) => setStatus('walk-status', err.message, 'error'));
    };

    const startWalk = () => {
      if (!navigator.geolocation) {
        setStatus('walk-status', 'Geolocation is not supported on this device', 'error');
        return;
      }
      postJSON('/api/distance/start')
        .then((data) => {
          applyWalk(data);
          setStatus('walk-status', 'Tracking your walk', 'ok');
          watchId = navigator.geolocation.watchPosition(onFix, (err) => {
            setStatus('walk-status', err.message || 'Location unavailable', 'error');
          }, { enableHighAccuracy: true, maximumAge: 1000 });
          walkTimer = setInterval(refreshWalk, 3000);
        })
        .catch((err) => setStatus('walk-status', err.message, 'error'));
    };

    const stopWalk = () => {
      if (watchId !== null) {
        navigator.geolocation.clearWatch(watchId);
        watchId = null;
      }
      if (walkTimer !== null) {
        clearInterval(walkTimer);
        walkTimer = null;
      }
      postJSON('/api/distance/stop')
        .then((data) => {
          applyWalk(data);
          setStatus('walk-status', 'Walk saved for this session', '');
        })
        .catch((err) => setStatus('walk-status', err.message, 'error'));
    };

    el('btn-walk-start').addEventListener('click', startWalk);
    el('btn-walk-stop').addEventListener('click', stopWalk);

    // --- quotes ---

    const applyQuote = (data) => {
      el('quote-text').textContent = `"${data.text}"`;
      el('quote-author').textContent = `- ${data.author}`;
    };

    const loadQuote = () => {
      api('/api/quote').then(applyQuote).catch(() => {});
    };

    el('btn-quote-next').addEventListener('click', () => {
      postJSON('/api/quote/next').then(applyQuote).catch(() => {});
    });

    // --- profile ---

    const loadProfile = () => {
      api('/api/profile')
        .then((data) => {
          el('profile-username').value = data.username || '';
          el('profile-weight').value = data.weight_kg === null ? '' : data.weight_kg;
        })
        .catch((err) => setStatus('profile-status', err.message, 'error'));
    };

    el('profile-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {};
      const username = el('profile-username').value.trim();
      const weight = el('profile-weight').value;
      if (username) {
        payload.username = username;
      }
      if (weight !== '') {
        payload.weight_kg = Number(weight);
      }
      postJSON('/api/profile', payload)
        .then(() => {
          setStatus('profile-status', 'Profile saved', 'ok');
          setTimeout(() => setStatus('profile-status', '', ''), 1500);
        })
        .catch((err) => setStatus('profile-status', err.message, 'error'));
    });

    // --- settings ---

    const applyTheme = (theme) => {
      document.body.classList.toggle('theme-dark', theme === 'dark');
      document.body.classList.toggle('theme-light', theme !== 'dark');
    };

    const applySettings = (data) => {
      el('setting-theme').checked = data.theme === 'dark';
      el('setting-notifications').checked = data.notifications;
      el('setting-sound').checked = data.sound;
      applyTheme(data.theme);
    };

    const loadSettings = () => {
      api('/api/settings').then(applySettings).catch((err) => setStatus('settings-status', err.message, 'error'));
    };

    const pushSettings = (patch) => {
      postJSON('/api/settings', patch)
        .then(applySettings)
        .catch((err) => setStatus('settings-status', err.message, 'error'));
    };

    el('setting-theme').addEventListener('change', (event) => {
      pushSettings({ theme: event.target.checked ? 'dark' : 'light' });
    });
    el('setting-notifications').addEventListener('change', (event) => {
      pushSettings({ notifications: event.target.checked });
    });
    el('setting-sound').addEventListener('change', (event) => {
      pushSettings({ sound: event.target.checked });
    });

    // --- home ---

    const loadHome = () => {
      loadSteps();
      loadStats();
      api('/api/water').then(applyWater).catch(() => {});
    };

    showSection(location.hash.replace('#', '') || 'home');
  </script>
</body>
</html>
"##;
