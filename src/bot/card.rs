// * Card Formatter
// * Renders normalized records into a title/body/footer card and converts it
// * into a serenity embed at the transport edge.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

use crate::config::constants::{
    LEADERBOARD_COLOUR, LEADERBOARD_TOP_N, LOOKUP_COLOUR, MAX_ECHOED_NAME_CHARS,
};
use crate::engine::period::Period;
use crate::engine::record::PlayerRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl CardField {
    fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

/// A reply card. Footer and timestamp are always set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub colour: u32,
    pub fields: Vec<CardField>,
    pub footer: String,
    pub timestamp: DateTime<Utc>,
}

impl Card {
    /// Convert to a serenity `CreateEmbed` builder.
    pub fn to_create_embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .title(&self.title)
            .description(&self.description)
            .colour(self.colour)
            .footer(CreateEmbedFooter::new(&self.footer))
            .timestamp(self.timestamp);

        if let Some(url) = &self.url {
            embed = embed.url(url);
        }

        embed.fields(
            self.fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone(), f.inline)),
        )
    }
}

/// Cuts a user-supplied name to `MAX_ECHOED_NAME_CHARS` characters.
pub fn clip_name(name: &str) -> String {
    if name.chars().count() <= MAX_ECHOED_NAME_CHARS {
        return name.to_string();
    }
    let mut clipped: String = name.chars().take(MAX_ECHOED_NAME_CHARS).collect();
    clipped.push('…');
    clipped
}

/// Top-N leaderboard card. An empty list renders a single "No data" block.
pub fn leaderboard_card(
    period: Period,
    records: &[PlayerRecord],
    source_host: &str,
    now: DateTime<Utc>,
) -> Card {
    let fields = if records.is_empty() {
        vec![CardField::new("No data", "No leaderboard data available.", false)]
    } else {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                CardField::new(
                    format!("#{} {}", i + 1, clip_name(&record.username)),
                    format!(
                        "+Kills: **{}**\nKills: {} · Deaths: {} · KDR: {}",
                        record.signed_delta(),
                        record.total_kills,
                        record.total_deaths,
                        record.kdr
                    ),
                    false,
                )
            })
            .collect()
    };

    Card {
        title: format!("🏆 {} Leaderboard (Top {})", period.label(), LEADERBOARD_TOP_N),
        description: "Top players by **kills gained (+)**".to_string(),
        url: None,
        colour: LEADERBOARD_COLOUR,
        fields,
        footer: format!("Source: {}", source_host),
        timestamp: now,
    }
}

/// Single-player highscores card.
pub fn lookup_card(record: &PlayerRecord, source_host: &str, now: DateTime<Utc>) -> Card {
    let fields = vec![
        CardField::new("Mode", &record.mode, true),
        CardField::new("Kills", &record.total_kills, true),
        CardField::new("Deaths", &record.total_deaths, true),
        CardField::new("KDR", &record.kdr, true),
        CardField::new("Streak", &record.streak, true),
        CardField::new("ELO", &record.elo, true),
    ];

    Card {
        title: format!("🔎 {}", clip_name(&record.username)),
        description: format!("Highscores stats from **{}**", source_host),
        url: record.source_url.clone(),
        colour: LOOKUP_COLOUR,
        fields,
        footer: format!("Source: {}", source_host),
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, delta: i64) -> PlayerRecord {
        PlayerRecord {
            period_kills_delta: delta,
            ..PlayerRecord::placeholder(name)
        }
    }

    #[test]
    fn test_empty_leaderboard_has_single_no_data_block() {
        let card = leaderboard_card(Period::Daily, &[], "tracker.example", Utc::now());
        assert_eq!(card.fields.len(), 1);
        assert_eq!(card.fields[0].name, "No data");
        assert_eq!(card.footer, "Source: tracker.example");
    }

    #[test]
    fn test_leaderboard_entries_ranked() {
        let records = vec![record("Bo", 9), record("Ann", 5)];
        let card = leaderboard_card(Period::Weekly, &records, "t", Utc::now());

        assert_eq!(card.title, "🏆 WEEKLY Leaderboard (Top 3)");
        assert_eq!(card.fields[0].name, "#1 Bo");
        assert!(card.fields[0].value.starts_with("+Kills: **+9**"));
        assert_eq!(card.fields[1].name, "#2 Ann");
    }

    #[test]
    fn test_lookup_field_order() {
        let mut rec = record("Jon Doe", 0);
        rec.source_url = Some("https://hs.example/?name=Jon+Doe".to_string());
        let card = lookup_card(&rec, "hs.example", Utc::now());

        let names: Vec<&str> = card.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Mode", "Kills", "Deaths", "KDR", "Streak", "ELO"]);
        assert_eq!(card.url.as_deref(), Some("https://hs.example/?name=Jon+Doe"));
        assert!(card.fields.iter().all(|f| f.inline));
    }

    #[test]
    fn test_clip_name() {
        assert_eq!(clip_name("Ann"), "Ann");
        let long = "é".repeat(MAX_ECHOED_NAME_CHARS + 5);
        let clipped = clip_name(&long);
        assert_eq!(clipped.chars().count(), MAX_ECHOED_NAME_CHARS + 1);
        assert!(clipped.ends_with('…'));
    }

    #[test]
    fn test_long_lookup_name_title_within_embed_limit() {
        let rec = record(&"x".repeat(400), 0);
        let card = lookup_card(&rec, "hs.example", Utc::now());
        assert!(card.title.chars().count() <= 256);
    }

    #[test]
    fn test_embed_conversion_keeps_content() {
        let card = leaderboard_card(Period::Monthly, &[record("Cy", 1)], "t", Utc::now());
        let json = serde_json::to_value(card.to_create_embed()).unwrap();
        assert_eq!(json["title"], "🏆 MONTHLY Leaderboard (Top 3)");
        assert_eq!(json["footer"]["text"], "Source: t");
        assert_eq!(json["fields"][0]["name"], "#1 Cy");
    }
}
