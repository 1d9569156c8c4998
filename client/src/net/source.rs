//! Data sources for the digest, upcoming events and briefings.
//!
//! DESIGN
//! ======
//! The controller never builds lists itself; it asks a [`DataSource`]. The
//! prototype ships [`MockDataSource`], which returns constant lists and
//! simulates briefing generation with a fixed delay. A networked source can
//! replace it without touching the controller.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::time::Duration;

use async_trait::async_trait;

use super::types::{Briefing, CaptureItem, CaptureKind, ClientError, Event, PERSONAL_NOTE_SOURCE};
use crate::util::delay;

#[async_trait(?Send)]
pub trait DataSource {
    /// Processed captures for the morning digest.
    async fn digest(&self) -> Result<Vec<CaptureItem>, ClientError>;

    /// Events coming up on the user's calendar.
    async fn upcoming_events(&self) -> Result<Vec<Event>, ClientError>;

    /// Generate briefings for the upcoming events.
    async fn generate_briefings(&self) -> Result<Vec<Briefing>, ClientError>;
}

/// Constant demo data.
#[derive(Debug, Clone)]
pub struct MockDataSource {
    briefing_delay: Duration,
}

impl MockDataSource {
    pub fn new(briefing_delay: Duration) -> Self {
        Self { briefing_delay }
    }
}

#[async_trait(?Send)]
impl DataSource for MockDataSource {
    async fn digest(&self) -> Result<Vec<CaptureItem>, ClientError> {
        Ok(mock_digest())
    }

    async fn upcoming_events(&self) -> Result<Vec<Event>, ClientError> {
        Ok(mock_events())
    }

    async fn generate_briefings(&self) -> Result<Vec<Briefing>, ClientError> {
        delay::sleep(self.briefing_delay).await;
        // Local offset: timestamps render in the offset they carry.
        let created_at = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, false);
        Ok(vec![mock_briefing(&created_at)])
    }
}

pub fn mock_digest() -> Vec<CaptureItem> {
    vec![
        CaptureItem {
            id: "1".into(),
            title: "AI技術の最新動向".into(),
            summary: "Gemini 1.5 Proの新機能についての記事。マルチモーダル機能が大幅に向上し、テキスト、画像、音声を統合した処理が可能になった。".into(),
            source: "https://example.com/ai-trends".into(),
            timestamp: "2024-01-20T09:00:00".into(),
            kind: CaptureKind::Url,
        },
        CaptureItem {
            id: "2".into(),
            title: "UXデザインのベストプラクティス".into(),
            summary: "モバイルファーストデザインの重要性について。ユーザー体験を向上させるための5つのポイントが解説されている。".into(),
            source: PERSONAL_NOTE_SOURCE.into(),
            timestamp: "2024-01-19T14:30:00".into(),
            kind: CaptureKind::Text,
        },
    ]
}

pub fn mock_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "プロジェクト進捗ミーティング".into(),
            start_time: "2024-01-22T10:00:00".into(),
            attendees: vec!["田中".into(), "佐藤".into(), "鈴木".into()],
            description: "Q1の進捗確認と課題の共有".into(),
        },
        Event {
            id: "2".into(),
            title: "クライアント向けプレゼンテーション".into(),
            start_time: "2024-01-23T14:00:00".into(),
            attendees: vec!["田中".into(), "クライアントA社".into()],
            description: "新機能のデモンストレーション".into(),
        },
    ]
}

pub fn mock_briefing(created_at: &str) -> Briefing {
    Briefing {
        id: "1".into(),
        event_title: "プロジェクト進捗ミーティング".into(),
        briefing_content: "• 前回のアクションアイテムの確認\n• Q1目標達成率: 85%\n• 主要課題: リソース配分の最適化\n• 提案事項: 自動化ツールの導入検討".into(),
        created_at: created_at.to_owned(),
    }
}
