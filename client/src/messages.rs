//! User-facing copy. The product ships in Japanese.

// Buttons
pub const PAST_MODE_LABEL: &str = "過去モード";
pub const FUTURE_MODE_LABEL: &str = "未来モード";
pub const CAPTURE_LABEL: &str = "キャプチャ";
pub const REFRESH_DIGEST_LABEL: &str = "ダイジェスト更新";
pub const REFRESH_EVENTS_LABEL: &str = "予定を更新";
pub const GENERATE_BRIEFING_LABEL: &str = "ブリーフィング生成";
pub const CAPTURING: &str = "キャプチャ中...";
pub const GENERATING: &str = "生成中...";

// Loading placeholders
pub const LOADING_DIGEST: &str = "ダイジェストを読み込み中...";
pub const LOADING_EVENTS: &str = "予定を読み込み中...";

// Empty lists
pub const EMPTY_DIGEST: &str = "まだダイジェストがありません。コンテンツをキャプチャして明日の朝をお楽しみに！";
pub const EMPTY_EVENTS: &str = "今後の予定がありません。";
pub const EMPTY_BRIEFINGS: &str = "ブリーフィングがありません。「ブリーフィング生成」ボタンをクリックしてください。";

// Load failures
pub const DIGEST_LOAD_FAILED: &str = "ダイジェストの読み込みに失敗しました。";
pub const EVENTS_LOAD_FAILED: &str = "予定の読み込みに失敗しました。";

// Toasts
pub const API_UNREACHABLE: &str = "APIサーバーに接続できません。バックエンドが起動していることを確認してください。";
pub const CONTENT_REQUIRED: &str = "内容を入力してください。";
pub const CAPTURE_TYPE_REQUIRED: &str = "キャプチャの種類を選択してください。";
pub const CAPTURED: &str = "コンテンツがキャプチャされました！";
pub const CAPTURE_FAILED: &str = "キャプチャに失敗しました。";
pub const BRIEFING_READY: &str = "ブリーフィングが生成されました！";
pub const BRIEFING_FAILED: &str = "ブリーフィング生成に失敗しました。";

// Entry decorations
pub const SOURCE_LINK: &str = "🔗 元記事";
pub const INVALID_DATE: &str = "Invalid Date";
