//! Digest, event and briefing list markup.

#[cfg(test)]
#[path = "lists_test.rs"]
mod lists_test;

use std::fmt::Write;

use super::{clock_time, escape_html, hour_minute, short_date, type_icon};
use crate::messages;
use crate::net::types::{Briefing, CaptureItem, Event};

/// Digest entries in input order, or the empty-digest message.
pub fn digest(items: &[CaptureItem]) -> String {
    if items.is_empty() {
        return empty(messages::EMPTY_DIGEST);
    }
    items.iter().fold(String::new(), |mut out, item| {
        let source_link = if item.has_external_source() {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
                escape_html(&item.source),
                messages::SOURCE_LINK
            )
        } else {
            String::new()
        };
        let _ = write!(
            out,
            "<div class=\"list-item\">\
             <h3>{title}</h3>\
             <p>{summary}</p>\
             <div class=\"meta\">\
             <span>📅 {date}</span>\
             <span>📝 {icon} {kind}</span>\
             {source_link}\
             </div>\
             </div>",
            title = escape_html(&item.title),
            summary = escape_html(&item.summary),
            date = short_date(&item.timestamp),
            icon = type_icon(item.kind),
            kind = item.kind,
        );
        out
    })
}

/// Upcoming events, or the no-events message.
pub fn events(events: &[Event]) -> String {
    if events.is_empty() {
        return empty(messages::EMPTY_EVENTS);
    }
    events.iter().fold(String::new(), |mut out, event| {
        let _ = write!(
            out,
            "<div class=\"list-item\">\
             <h3>{title}</h3>\
             <p>{description}</p>\
             <div class=\"meta\">\
             <span>📅 {date}</span>\
             <span>🕒 {time}</span>\
             <span>👥 {attendees}</span>\
             </div>\
             </div>",
            title = escape_html(&event.title),
            description = escape_html(&event.description),
            date = short_date(&event.start_time),
            time = hour_minute(&event.start_time),
            attendees = escape_html(&event.attendees.join(", ")),
        );
        out
    })
}

/// Generated briefings, or the prompt to generate one.
pub fn briefings(briefings: &[Briefing]) -> String {
    if briefings.is_empty() {
        return empty(messages::EMPTY_BRIEFINGS);
    }
    briefings.iter().fold(String::new(), |mut out, briefing| {
        let _ = write!(
            out,
            "<div class=\"list-item\">\
             <h3>📋 {title}</h3>\
             <pre style=\"white-space: pre-wrap; font-family: inherit;\">{content}</pre>\
             <div class=\"meta\">\
             <span>📅 {date}</span>\
             <span>🕒 {time}</span>\
             </div>\
             </div>",
            title = escape_html(&briefing.event_title),
            content = escape_html(&briefing.briefing_content),
            date = short_date(&briefing.created_at),
            time = clock_time(&briefing.created_at),
        );
        out
    })
}

fn empty(message: &str) -> String {
    format!("<p>{}</p>", escape_html(message))
}
