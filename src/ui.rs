use crate::models::{FlameLevel, SparkResponse};

pub fn render_index(spark: &SparkResponse) -> String {
    let user1 = &spark.users[0];
    let user2 = &spark.users[1];

    INDEX_HTML
        .replace("{{DATE}}", &spark.date)
        .replace("{{SPARK_COUNT}}", &spark.spark_count.to_string())
        .replace("{{CURRENT_STREAK}}", &spark.current_streak.to_string())
        .replace("{{LONGEST_STREAK}}", &spark.longest_streak.to_string())
        .replace("{{FLAME_LEVEL}}", flame_class(spark.flame_level))
        .replace("{{USER1_NAME}}", &escape_html(&user1.name))
        .replace("{{USER2_NAME}}", &escape_html(&user2.name))
        .replace("{{USER1_CLASS}}", clicked_class(user1.clicked_today))
        .replace("{{USER2_CLASS}}", clicked_class(user2.clicked_today))
        .replace("{{USER1_DISABLED}}", disabled_attr(user1.clicked_today))
        .replace("{{USER2_DISABLED}}", disabled_attr(user2.clicked_today))
        .replace("{{USER1_STATUS}}", status_text(user1.clicked_today))
        .replace("{{USER2_STATUS}}", status_text(user2.clicked_today))
        .replace("{{BANNER_CLASS}}", banner_class(spark.both_clicked_today))
}

fn flame_class(level: FlameLevel) -> &'static str {
    match level {
        FlameLevel::Level1 => "level1",
        FlameLevel::Level2 => "level2",
        FlameLevel::Level3 => "level3",
        FlameLevel::Level4 => "level4",
    }
}

fn clicked_class(clicked: bool) -> &'static str {
    if clicked { "clicked" } else { "" }
}

fn disabled_attr(clicked: bool) -> &'static str {
    if clicked { "disabled" } else { "" }
}

fn status_text(clicked: bool) -> &'static str {
    if clicked { "Clicked today!" } else { "Click to spark!" }
}

fn banner_class(both: bool) -> &'static str {
    if both { "banner visible" } else { "banner" }
}

fn escape_html(value: &str) -> String {
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
  <title>Chat Spark</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f3e8ff;
      --bg-2: #ffe0ec;
      --ink: #2b2a28;
      --accent: #7c3aed;
      --accent-2: #ec4899;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(124, 58, 237, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #fde6f3 60%, #f6f0ff 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
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
      flex-direction: column;
      gap: 6px;
      text-align: center;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
      color: var(--accent);
    }

    .subtitle {
      margin: 0;
      color: #6b7280;
      font-size: 1rem;
    }

    .flame-card {
      display: grid;
      place-items: center;
      gap: 10px;
      background: white;
      border-radius: 20px;
      padding: 24px;
      border: 1px solid rgba(124, 58, 237, 0.08);
    }

    .flame {
      font-size: 64px;
      line-height: 1;
      filter: grayscale(1) opacity(0.5);
      transition: all 500ms ease;
    }

    .flame.level1 {
      filter: grayscale(1) opacity(0.5);
    }

    .flame.level1.lit {
      filter: none;
    }

    .flame.level2 {
      filter: none;
      font-size: 80px;
    }

    .flame.level3 {
      filter: none;
      font-size: 96px;
      text-shadow: 0 0 24px rgba(239, 68, 68, 0.45);
    }

    .flame.level4 {
      filter: none;
      font-size: 120px;
      text-shadow: 0 0 32px rgba(236, 72, 153, 0.55);
    }

    .spark-total {
      font-size: 3rem;
      font-weight: 600;
      color: var(--accent);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(124, 58, 237, 0.08);
      display: grid;
      gap: 8px;
      text-align: center;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    .stat .value.record {
      color: var(--accent-2);
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 18px;
      padding: 20px;
      font-size: 1.05rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: grid;
      gap: 6px;
      justify-items: center;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-user {
      background: white;
      color: var(--ink);
      box-shadow: 0 10px 24px rgba(124, 58, 237, 0.18);
    }

    .btn-user:not(:disabled):hover {
      transform: translateY(-2px);
      box-shadow: 0 14px 28px rgba(124, 58, 237, 0.24);
    }

    .btn-user:disabled,
    .btn-user.clicked {
      opacity: 0.55;
      cursor: not-allowed;
      box-shadow: none;
    }

    .btn-user .user-name {
      font-size: 1.2rem;
    }

    .btn-user .user-status {
      font-size: 0.9rem;
      font-weight: 500;
      color: #6b7280;
    }

    .btn-user.clicked .user-status {
      color: #2d7a4b;
    }

    .banner {
      display: none;
      background: linear-gradient(90deg, #fb923c 0%, #ec4899 100%);
      color: white;
      border-radius: 16px;
      padding: 16px;
      text-align: center;
      font-weight: 600;
      animation: pulse 2s infinite;
    }

    .banner.visible {
      display: block;
    }

    .btn-reset {
      background: rgba(124, 58, 237, 0.08);
      color: #4b5563;
      font-weight: 500;
    }

    .btn-reset:hover {
      background: rgba(124, 58, 237, 0.14);
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
      text-align: center;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
      text-align: center;
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

    @keyframes pulse {
      0%, 100% { opacity: 1; }
      50% { opacity: 0.85; }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      button {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Chat Spark</h1>
      <p class="subtitle">Keep your connection alive! Both of you click once a day to grow the spark.</p>
    </header>

    <section class="flame-card">
      <div id="flame" class="flame {{FLAME_LEVEL}}">&#128293;</div>
      <div id="spark-count" class="spark-total">{{SPARK_COUNT}}</div>
      <span class="label">Total sparks &middot; <span id="date">{{DATE}}</span></span>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">Current streak</span>
        <span id="current-streak" class="value">{{CURRENT_STREAK}}</span>
      </div>
      <div class="stat">
        <span class="label">Longest streak</span>
        <span id="longest-streak" class="value record">{{LONGEST_STREAK}}</span>
      </div>
    </section>

    <section class="actions">
      <form id="user1-form" method="post" action="/click/user1">
        <button class="btn-user {{USER1_CLASS}}" id="user1-btn" type="submit" {{USER1_DISABLED}}>
          <span class="user-name" id="user1-name">{{USER1_NAME}}</span>
          <span class="user-status" id="user1-status">{{USER1_STATUS}}</span>
        </button>
      </form>
      <form id="user2-form" method="post" action="/click/user2">
        <button class="btn-user {{USER2_CLASS}}" id="user2-btn" type="submit" {{USER2_DISABLED}}>
          <span class="user-name" id="user2-name">{{USER2_NAME}}</span>
          <span class="user-status" id="user2-status">{{USER2_STATUS}}</span>
        </button>
      </form>
    </section>

    <div id="banner" class="{{BANNER_CLASS}}">Both of you clicked today! The spark grew.</div>

    <form id="reset-form" method="post" action="/reset">
      <button class="btn-reset" id="reset-btn" type="submit">Reset spark (keep longest streak)</button>
    </form>

    <div class="status" id="status"></div>
    <p class="hint">Both users must click on the same calendar day (server time) to earn a spark. State lives only for this server session.</p>
  </main>

  <script>
    const flameEl = document.getElementById('flame');
    const sparkCountEl = document.getElementById('spark-count');
    const dateEl = document.getElementById('date');
    const currentStreakEl = document.getElementById('current-streak');
    const longestStreakEl = document.getElementById('longest-streak');
    const bannerEl = document.getElementById('banner');
    const statusEl = document.getElementById('status');

    const userEls = {
      user1: {
        button: document.getElementById('user1-btn'),
        name: document.getElementById('user1-name'),
        status: document.getElementById('user1-status')
      },
      user2: {
        button: document.getElementById('user2-btn'),
        name: document.getElementById('user2-name'),
        status: document.getElementById('user2-status')
      }
    };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const updateUI = (data) => {
      dateEl.textContent = data.date;
      sparkCountEl.textContent = data.spark_count;
      currentStreakEl.textContent = data.current_streak;
      longestStreakEl.textContent = data.longest_streak;

      flameEl.className = `flame ${data.flame_level}`;
      if (data.current_streak > 0) {
        flameEl.classList.add('lit');
      }

      data.users.forEach((user, index) => {
        const els = userEls[index === 0 ? 'user1' : 'user2'];
        els.name.textContent = user.name;
        els.status.textContent = user.clicked_today ? 'Clicked today!' : 'Click to spark!';
        els.button.disabled = user.clicked_today;
        els.button.classList.toggle('clicked', user.clicked_today);
      });

      bannerEl.classList.toggle('visible', data.both_clicked_today);
    };

    const loadSpark = async () => {
      const res = await fetch('/api/spark');
      if (!res.ok) {
        throw new Error('Unable to load spark state');
      }
      updateUI(await res.json());
    };

    const sendClick = async (user) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/click', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ user })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      updateUI(await res.json());
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    const sendReset = async () => {
      setStatus('Resetting...', 'info');
      const res = await fetch('/api/reset', { method: 'POST' });
      if (!res.ok) {
        throw new Error('Reset failed');
      }
      updateUI(await res.json());
      setStatus('Spark reset', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    ['user1', 'user2'].forEach((user) => {
      const form = document.getElementById(`${user}-form`);
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        sendClick(user).catch((err) => setStatus(err.message, 'error'));
      });
    });

    document.getElementById('reset-form').addEventListener('submit', (event) => {
      event.preventDefault();
      sendReset().catch((err) => setStatus(err.message, 'error'));
    });

    loadSpark().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserView;

    fn sample() -> SparkResponse {
        SparkResponse {
            date: "2026-03-09".to_string(),
            users: vec![
                UserView {
                    name: "Alice".to_string(),
                    clicked_today: true,
                    last_click: Some("2026-03-09T12:00:00+00:00".to_string()),
                },
                UserView {
                    name: "Bob".to_string(),
                    clicked_today: false,
                    last_click: None,
                },
            ],
            spark_count: 4,
            current_streak: 3,
            longest_streak: 5,
            flame_level: FlameLevel::Level2,
            both_clicked_today: false,
            started_at: "2026-03-01T08:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn render_fills_every_placeholder() {
        let html = render_index(&sample());
        assert!(!html.contains("{{"));
        assert!(html.contains("Alice"));
        assert!(html.contains("Bob"));
        assert!(html.contains("2026-03-09"));
        assert!(html.contains("level2"));
    }

    #[test]
    fn render_escapes_user_names() {
        let mut spark = sample();
        spark.users[0].name = "<script>".to_string();
        let html = render_index(&spark);
        assert!(html.contains("&lt;script&gt;"));
    }
}
