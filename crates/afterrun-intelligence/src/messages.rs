// ABOUTME: Localized message catalogs for feedback text and assessment labels
// ABOUTME: English and German phrases for bands, narratives, prompts, and UI labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Message catalogs
//!
//! Every user-facing phrase of the feedback engine and every label accepted
//! by the assessment normalizer lives here, one catalog per [`Locale`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Output language of the feedback text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English
    #[default]
    English,
    /// German
    German,
}

impl Locale {
    /// All supported locales
    pub const ALL: [Self; 2] = [Self::English, Self::German];

    /// Phrase catalog for this locale
    #[must_use]
    pub fn catalog(self) -> &'static MessageCatalog {
        match self {
            Self::English => &ENGLISH,
            Self::German => &GERMAN,
        }
    }

    /// Short language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }

    /// Opening sentence of the summary
    #[must_use]
    pub fn summary_sentence(self, distance_km: f64, duration: &str, pace: &str) -> String {
        match self {
            Self::English => format!(
                "You covered {distance_km} km in {duration} at an average pace of {pace} min/km."
            ),
            Self::German => format!(
                "Du hast {distance_km} km in {duration} zurückgelegt mit einem durchschnittlichen Tempo von {pace} min/km."
            ),
        }
    }

    /// Elevation addendum of the summary
    #[must_use]
    pub fn elevation_sentence(self, elevation_gain_m: f64) -> String {
        match self {
            Self::English => format!(" Elevation gain: {elevation_gain_m} m."),
            Self::German => format!(" Höhenmeter: {elevation_gain_m} m."),
        }
    }

    /// Heart-rate addendum of the summary
    #[must_use]
    pub fn heart_rate_sentence(self, avg_heart_rate: u32) -> String {
        match self {
            Self::English => format!(" Average heart rate: {avg_heart_rate} bpm."),
            Self::German => format!(" Durchschnittliche Herzfrequenz: {avg_heart_rate} bpm."),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "de" | "german" | "deutsch" => Ok(Self::German),
            other => Err(ConfigError::UnknownLocale(other.to_owned())),
        }
    }
}

/// Fixed phrases of one language
#[derive(Debug)]
pub struct MessageCatalog {
    /// Feeling labels, index 0 is score 1
    pub feeling_labels: [&'static str; 5],
    /// Difficulty labels, index 0 is score 1
    pub difficulty_labels: [&'static str; 5],

    /// Distance below 5 km
    pub short_run: &'static str,
    /// Distance in [5, 10) km
    pub medium_run: &'static str,
    /// Distance in [10, 21) km
    pub long_run: &'static str,
    /// Distance of 21 km or more
    pub very_long_run: &'static str,

    /// Pace below 4.5 min/km
    pub very_fast_pace: &'static str,
    /// Pace in [4.5, 5.5) min/km
    pub brisk_pace: &'static str,
    /// Pace in [5.5, 6.5) min/km
    pub moderate_pace: &'static str,
    /// Pace of 6.5 min/km or slower
    pub easy_pace: &'static str,

    /// Markdown heading of the data-vs-feeling block
    pub data_vs_feeling_heading: &'static str,
    /// High feeling, easy difficulty
    pub alignment: &'static str,
    /// High feeling, not easy difficulty
    pub hidden_fatigue: &'static str,
    /// Mid feeling
    pub average_run: &'static str,
    /// Low feeling, hard difficulty
    pub challenging_day: &'static str,
    /// Low feeling, not hard difficulty
    pub mismatch: &'static str,
    /// Label in front of the athlete's own notes
    pub notes_label: &'static str,

    /// Distance above 10 km
    pub long_distance_prompt: &'static str,
    /// Pace below 5.0 min/km
    pub fast_pace_prompt: &'static str,
    /// Pace of 5.0 min/km or slower
    pub base_endurance_prompt: &'static str,
    /// Average heart rate above 160 bpm
    pub high_heart_rate_prompt: &'static str,
    /// Average heart rate of 160 bpm or less
    pub moderate_heart_rate_prompt: &'static str,
    /// Feeling of 2 or less
    pub improve_prompt: &'static str,
    /// Feeling of 3 or more
    pub worked_well_prompt: &'static str,
    /// Always last
    pub closing_prompt: &'static str,
}

/// English phrases
pub static ENGLISH: MessageCatalog = MessageCatalog {
    feeling_labels: ["1 - Very bad", "2 - Bad", "3 - Ok", "4 - Good", "5 - Great"],
    difficulty_labels: ["Very easy", "Easy", "Moderate", "Hard", "Very hard"],

    short_run: "This was a short run, ideal for recovery or technique work.",
    medium_run: "A medium distance, good for regular training.",
    long_run: "A longer distance that demands endurance and mental strength.",
    very_long_run: "An impressive long distance that shows a lot of preparation and staying power.",

    very_fast_pace: "Your pace was very fast.",
    brisk_pace: "Your pace was brisk.",
    moderate_pace: "Your pace was moderate.",
    easy_pace: "Your pace was relaxed.",

    data_vs_feeling_heading: "**Data vs. feeling:**",
    alignment: "Your objective data and your feeling match. \
        You were well recovered and the run felt accordingly.",
    hidden_fatigue: "Interesting: the data shows a solid performance, but you experienced the run \
        as hard. This could point to fatigue or other stress.",
    average_run: "You had an average run. Runs like this are normal and important \
        for building up your training.",
    challenging_day: "Today's run was challenging. That is completely normal and can have many reasons: \
        weather, tiredness, or simply a tough day. What matters is listening to your body.",
    mismatch: "Even though the run did not go perfectly, the data is solid. \
        Sometimes feeling and performance don't match, and that is part of it.",
    notes_label: "Your notes:",

    long_distance_prompt: "What helped you sustain this longer distance?",
    fast_pace_prompt: "At your fast pace: how was your breathing? Could you still hold a conversation?",
    base_endurance_prompt: "Your relaxed pace is good for base endurance. How did your energy level feel?",
    high_heart_rate_prompt: "Your heart rate was relatively high. Was the pace a deliberate choice or did it feel strenuous?",
    moderate_heart_rate_prompt: "Your heart rate was in the moderate zone. Perfect for endurance training!",
    improve_prompt: "What could help you feel better next time? (e.g. more sleep, a better warm-up, different timing)",
    worked_well_prompt: "What worked especially well today? Try to keep it up!",
    closing_prompt: "What would you like to do differently or the same on your next run?",
};

/// German phrases
pub static GERMAN: MessageCatalog = MessageCatalog {
    feeling_labels: [
        "1 - Sehr schlecht",
        "2 - Schlecht",
        "3 - Ok",
        "4 - Gut",
        "5 - Großartig",
    ],
    difficulty_labels: ["Sehr leicht", "Leicht", "Mittel", "Schwer", "Sehr schwer"],

    short_run: "Dies war ein kurzer Lauf, ideal für Regeneration oder Techniktraining.",
    medium_run: "Eine mittlere Distanz, gut für regelmäßiges Training.",
    long_run: "Eine längere Distanz, die Ausdauer und mentale Stärke erfordert.",
    very_long_run: "Eine beeindruckende lange Distanz, die viel Vorbereitung und Durchhaltevermögen zeigt.",

    very_fast_pace: "Dein Tempo war sehr schnell.",
    brisk_pace: "Dein Tempo war zügig.",
    moderate_pace: "Dein Tempo war moderat.",
    easy_pace: "Dein Tempo war entspannt.",

    data_vs_feeling_heading: "**Daten vs. Gefühl:**",
    alignment: "Deine objektiven Daten und dein Gefühl stimmen überein. \
        Du warst gut erholt und der Lauf fühlte sich entsprechend an.",
    hidden_fatigue: "Interessant: Die Daten zeigen eine solide Leistung, aber du hast den Lauf \
        als anstrengend empfunden. Das könnte auf Ermüdung oder andere Belastungen hinweisen.",
    average_run: "Du hattest einen durchschnittlichen Lauf. Solche Läufe sind normal und wichtig \
        für den Trainingsaufbau.",
    challenging_day: "Der Lauf war heute herausfordernd. Das ist völlig normal und kann viele Gründe haben: \
        Wetter, Müdigkeit, oder einfach ein schwerer Tag. Wichtig ist, auf deinen Körper zu hören.",
    mismatch: "Obwohl der Lauf nicht optimal lief, sind die Daten solide. \
        Manchmal stimmen Gefühl und Leistung nicht überein, das gehört dazu.",
    notes_label: "Deine Notizen:",

    long_distance_prompt: "Was hat dir geholfen, diese längere Distanz durchzuhalten?",
    fast_pace_prompt: "Bei deinem schnellen Tempo: Wie war deine Atmung? Konntest du dich noch unterhalten?",
    base_endurance_prompt: "Dein entspanntes Tempo ist gut für Grundlagenausdauer. Wie fühlte sich dein Energielevel an?",
    high_heart_rate_prompt: "Deine Herzfrequenz war relativ hoch. War das Tempo bewusst gewählt oder fühlte es sich anstrengend an?",
    moderate_heart_rate_prompt: "Deine Herzfrequenz war im moderaten Bereich. Perfekt für Ausdauertraining!",
    improve_prompt: "Was könnte dir beim nächsten Mal helfen, dich besser zu fühlen? (z.B. mehr Schlaf, besseres Warm-up, anderes Timing)",
    worked_well_prompt: "Was hat heute besonders gut funktioniert? Versuche das beizubehalten!",
    closing_prompt: "Was möchtest du beim nächsten Lauf anders oder genauso machen?",
};
