use crate::storage::theme::Theme;
use maud::{html, Markup, PreEscaped, DOCTYPE};

// All styling is inlined; the theme attribute on <html> drives the palette.
const STYLE: &str = r#"
:root {
  --bg: #fafafa;
  --fg: #1f2937;
  --muted: #6b7280;
  --card-bg: #ffffff;
  --border: #e5e7eb;
  --pill-bg: #f3f4f6;
  --accent: #d97706;
  --heart: #f43f5e;
}
[data-theme="dark"] {
  --bg: #0a0a0a;
  --fg: #e5e7eb;
  --muted: #9ca3af;
  --card-bg: #1f2937;
  --border: #374151;
  --pill-bg: #374151;
  --accent: #fbbf24;
}
* { box-sizing: border-box; }
body {
  margin: 0;
  font-family: system-ui, sans-serif;
  background: var(--bg);
  color: var(--fg);
}
a { color: inherit; text-decoration: none; }
.topbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.75rem 1.5rem;
  border-bottom: 1px solid var(--border);
}
.logo { font-weight: 700; letter-spacing: 0.04em; }
.theme-toggle { display: flex; gap: 0.25rem; background: var(--pill-bg); border-radius: 999px; padding: 0.2rem; }
.theme-toggle .mode { padding: 0.25rem 0.8rem; border-radius: 999px; font-size: 0.9rem; color: var(--muted); }
.theme-toggle .mode.active { background: var(--accent); color: #fff; }
.hero {
  padding: 4rem 1.5rem;
  background: linear-gradient(135deg, #4c1d95, #be185d);
  color: #fff;
}
.hero h1 { font-size: 2.5rem; margin: 0 0 0.5rem; }
.hero .tagline { font-size: 1.2rem; opacity: 0.9; margin: 0 0 2rem; }
.hero .cta, .status .cta {
  display: inline-block;
  padding: 0.7rem 1.4rem;
  border-radius: 999px;
  background: var(--accent);
  color: #fff;
  font-weight: 600;
}
.stats { display: flex; gap: 1rem; margin-top: 2.5rem; }
.stat { background: rgba(255,255,255,0.12); padding: 0.75rem 1.25rem; border-radius: 0.5rem; }
.stat-value { font-size: 1.4rem; font-weight: 700; margin: 0; }
.stat-label { font-size: 0.85rem; opacity: 0.8; margin: 0; }
#properties { padding: 1.5rem; max-width: 72rem; margin: 0 auto; }
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  background: var(--card-bg);
}
.pills { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.pill {
  padding: 0.45rem 1rem;
  border-radius: 999px;
  background: var(--pill-bg);
  font-size: 0.95rem;
}
.pill.active { background: var(--accent); color: #fff; }
.extra-filters { display: flex; align-items: center; gap: 1rem; }
.toggle { display: inline-flex; align-items: center; gap: 0.5rem; font-size: 0.95rem; }
.toggle .knob {
  width: 2.2rem; height: 1.2rem; border-radius: 999px;
  background: var(--pill-bg); position: relative; display: inline-block;
}
.toggle .knob::after {
  content: ""; position: absolute; top: 0.15rem; left: 0.15rem;
  width: 0.9rem; height: 0.9rem; border-radius: 999px; background: #fff;
  transition: transform 0.15s ease;
}
.toggle.on .knob { background: var(--accent); }
.toggle.on .knob::after { transform: translateX(1rem); }
.bedroom-select select {
  padding: 0.45rem 0.8rem;
  border-radius: 0.5rem;
  border: 1px solid var(--border);
  background: var(--card-bg);
  color: var(--fg);
}
.count { margin: 1.5rem 0 0.25rem; font-weight: 400; }
.count-number { color: var(--accent); font-size: 1.4rem; font-weight: 600; }
.updated { color: var(--muted); font-size: 0.85rem; margin: 0 0 1rem; }
.grid {
  display: grid;
  gap: 1.5rem;
  grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
}
.card {
  background: var(--card-bg);
  border-radius: 0.75rem;
  overflow: hidden;
  border: 1px solid var(--border);
}
.card-media { position: relative; aspect-ratio: 4 / 3; }
.card-media img { width: 100%; height: 100%; object-fit: cover; display: block; }
.badge {
  position: absolute; top: 0.75rem; left: 0.75rem;
  padding: 0.2rem 0.6rem; border-radius: 999px;
  background: var(--card-bg); font-size: 0.75rem; font-weight: 600;
}
.heart {
  position: absolute; top: 0.75rem; right: 0.75rem;
  width: 2rem; height: 2rem; border-radius: 999px;
  display: flex; align-items: center; justify-content: center;
  background: rgba(255,255,255,0.9); color: #1f2937;
}
.heart.active { background: var(--heart); color: #fff; }
.card-body { padding: 1rem; }
.card-body h3 { margin: 0 0 0.25rem; font-size: 1.05rem; }
.description {
  color: var(--muted); font-size: 0.9rem; margin: 0 0 0.5rem;
  display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden;
}
.capacity { color: var(--muted); font-size: 0.85rem; margin: 0 0 0.75rem; }
.card-foot { display: flex; justify-content: space-between; align-items: center; border-top: 1px solid var(--border); padding-top: 0.75rem; }
.price .amount { color: var(--accent); font-weight: 600; }
.price .per { color: var(--muted); font-size: 0.85rem; margin-left: 0.2rem; }
.rating { color: var(--accent); }
.price, .rating { margin: 0; }
.status { text-align: center; padding: 4rem 0; color: var(--muted); }
.status.error { color: #dc2626; }
.status .detail { font-size: 0.9rem; margin-bottom: 1.5rem; }
.empty-state {
  text-align: center; padding: 3rem 0;
  border: 2px dashed var(--border); border-radius: 0.75rem; color: var(--muted);
}
.favorites-fab {
  position: fixed; right: 1rem; bottom: 1rem;
  padding: 0.7rem 1.1rem; border-radius: 999px;
  background: var(--heart); color: #fff; font-weight: 600;
  box-shadow: 0 4px 12px rgba(0,0,0,0.25);
}
.favorites-panel {
  position: fixed; inset: 0 0 0 auto; width: 24rem; max-width: 100%;
  background: var(--card-bg); border-left: 1px solid var(--border);
  padding: 1rem; overflow-y: auto; z-index: 10;
}
.favorites-panel h2 { border-bottom: 1px solid var(--border); padding-bottom: 0.75rem; }
.favorites-panel .count { color: var(--accent); }
.favorites-panel .close { color: var(--muted); }
.favorites-panel .empty { text-align: center; padding: 3rem 0; color: var(--muted); }
.favorites-panel .hint { font-size: 0.85rem; }
.favorites-list { display: flex; flex-direction: column; gap: 1rem; padding-top: 1rem; }
"#;

pub fn desktop_layout(title: &str, theme: Theme, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html data-theme=(theme.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                (content)
            }
        }
    }
}
