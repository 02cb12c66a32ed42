// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the retort CLI.
//!
//! OneDark on dark terminals, One Light on light ones. Theme detection tries
//! `RETORT_THEME` first, then `COLORFGBG`, then falls back to dark. `NO_COLOR`
//! and non-TTY stdout turn colors off entirely.

use std::sync::OnceLock;

use retort::{Answer, Reply};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("RETORT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 and up (except 8) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

/// Colors on only for a TTY without `NO_COLOR`.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Confidence as a percentage: green when sure, yellow when plausible, red otherwise.
pub fn confidence_label(confidence: f32) -> String {
    let text = format!("{:>4.0}%", confidence * 100.0);
    let color: fn() -> String = if confidence >= 0.8 {
        GREEN
    } else if confidence >= 0.5 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[BOLD], &text)
}

pub fn print_answers(answers: &[Answer]) {
    if answers.is_empty() {
        println!("{}", themed(GRAY, &[], "I don't know how to answer that yet."));
        return;
    }
    for answer in answers {
        println!("{}  {}", confidence_label(answer.confidence), answer.content);
    }
}

pub fn print_reply(reply: &Reply) {
    match reply {
        Reply::Greeting(text) | Reply::Clarify(text) => {
            println!("{}", themed(CYAN, &[], text));
        }
        Reply::Answers(answers) => print_answers(answers),
    }
}

pub fn print_notice(text: &str) {
    println!("{}", themed(GRAY, &[], text));
}

pub fn prompt() -> String {
    themed(CYAN, &[BOLD], "> ")
}
