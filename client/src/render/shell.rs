//! Full page document carrying every id the controller uses.
//!
//! Served by the API stub at `/app`. The browser bundle under `/pkg` mounts
//! the controller onto it.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use crate::dom::ids;
use crate::messages;

const STYLE: &str = r"
body { font-family: sans-serif; margin: 0; padding: 1.5rem; background: #f7fafc; }
.mode-toggle { display: flex; gap: .5rem; margin-bottom: 1rem; }
.mode-btn.active { background: #4a5568; color: white; }
.mode-content { display: none; }
.mode-content.active { display: block; }
.list-item { background: white; border-radius: 8px; padding: 1rem; margin-bottom: .75rem; }
.meta { display: flex; gap: 1rem; color: #718096; font-size: .85rem; }
.loading { display: inline-block; width: 1em; height: 1em; border: 2px solid #cbd5e0; border-top-color: #4a5568; border-radius: 50%; animation: spin 1s linear infinite; }
.toast-stack { position: fixed; top: 20px; right: 20px; display: flex; flex-direction: column; gap: .5rem; z-index: 1000; }
.toast { padding: 1rem 1.5rem; border-radius: 8px; color: white; font-weight: 600; }
.toast-new { animation: slideIn 0.3s ease; }
.toast-leaving { animation: slideOut 0.3s ease forwards; }
@keyframes spin { to { transform: rotate(360deg); } }
@keyframes slideIn { from { transform: translateX(100%); opacity: 0; } to { transform: translateX(0); opacity: 1; } }
@keyframes slideOut { from { transform: translateX(0); opacity: 1; } to { transform: translateX(100%); opacity: 0; } }
";

const BOOT: &str = "import init, { mount } from '/pkg/janus_client.js'; init().then(() => mount());";

pub fn page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Janus</title>
<style>{STYLE}</style>
</head>
<body>
<nav class="mode-toggle">
<button id="{past_btn}" class="mode-btn active">{past_label}</button>
<button id="{future_btn}" class="mode-btn">{future_label}</button>
</nav>
<section id="{past}" class="mode-content active">
<div class="capture-form">
<select id="{capture_type}">
<option value="url">URL</option>
<option value="text">テキスト</option>
<option value="voice">音声</option>
</select>
<textarea id="{capture_content}" rows="3"></textarea>
<button id="{capture_btn}">{capture_label}</button>
</div>
<button id="{refresh_digest}">{refresh_digest_label}</button>
<div id="{digest_list}"></div>
</section>
<section id="{future}" class="mode-content">
<button id="{refresh_events}">{refresh_events_label}</button>
<div id="{upcoming}"></div>
<button id="{generate_btn}">{generate_label}</button>
<div id="{briefing_list}"></div>
</section>
<div id="{toast_stack}" class="toast-stack"></div>
<script type="module">{BOOT}</script>
</body>
</html>
"#,
        past_btn = ids::PAST_MODE_BTN,
        past_label = messages::PAST_MODE_LABEL,
        future_btn = ids::FUTURE_MODE_BTN,
        future_label = messages::FUTURE_MODE_LABEL,
        past = ids::PAST_MODE,
        capture_type = ids::CAPTURE_TYPE,
        capture_content = ids::CAPTURE_CONTENT,
        capture_btn = ids::CAPTURE_BTN,
        capture_label = messages::CAPTURE_LABEL,
        refresh_digest = ids::REFRESH_DIGEST_BTN,
        refresh_digest_label = messages::REFRESH_DIGEST_LABEL,
        digest_list = ids::DIGEST_LIST,
        future = ids::FUTURE_MODE,
        refresh_events = ids::REFRESH_EVENTS_BTN,
        refresh_events_label = messages::REFRESH_EVENTS_LABEL,
        upcoming = ids::UPCOMING_EVENTS,
        generate_btn = ids::GENERATE_BRIEFING_BTN,
        generate_label = messages::GENERATE_BRIEFING_LABEL,
        briefing_list = ids::BRIEFING_LIST,
        toast_stack = ids::TOAST_STACK,
    )
}
