//! Human-readable text for each query result.

use apiquery_core::{Completion, Coordinates, CurrentWeather, Post, Ticker, Todo, User};
use std::fmt::Write;

/// Only this many todos are listed.
pub const TODO_LIMIT: usize = 10;

pub fn user(id: &str, user: &User) -> String {
    let mut out = format!("\n--- User #{id} Info ---\nName: {}\n", user.name);

    let city = user.address.as_ref().and_then(|a| a.city.as_deref());
    let company = user.company.as_ref().and_then(|c| c.name.as_deref());
    let extra = [
        ("Username", user.username.as_deref()),
        ("Email", user.email.as_deref()),
        ("Phone", user.phone.as_deref()),
        ("Website", user.website.as_deref()),
        ("City", city),
        ("Company", company),
    ];
    for (label, value) in extra {
        if let Some(value) = value {
            let _ = writeln!(out, "{label}: {value}");
        }
    }
    out
}

pub fn posts(user_id: &str, posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found for this user.\n".to_string();
    }

    let mut out = format!("\n--- Posts by User #{user_id} ---\n");
    for (i, post) in posts.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, post.title);
    }
    out
}

pub fn ticker(ticker: &Ticker) -> String {
    let usd = &ticker.quotes.usd;
    format!(
        "\n--- {} ({}) ---\nPrice: ${}\n24h Change: {:+.2}%\n",
        ticker.name,
        ticker.symbol,
        group_thousands(usd.price),
        usd.percent_change_24h,
    )
}

pub fn weather(coords: &Coordinates, current: &CurrentWeather) -> String {
    let mut out = format!(
        "\n--- Weather in {} ---\nLatitude:  {}\nLongitude: {}\nTemperature: {}°C\nWind Speed:  {} km/h\n",
        coords.name,
        reading(coords.latitude),
        reading(coords.longitude),
        reading(current.temperature),
        reading(current.windspeed),
    );
    if let Some(at) = current.observed_at() {
        let _ = writeln!(out, "Observed:    {}", at.format("%Y-%m-%d %H:%M"));
    }
    out
}

pub fn todos(completion: Completion, todos: &[Todo]) -> String {
    let shown = &todos[..todos.len().min(TODO_LIMIT)];

    let mut out =
        format!("\n--- Showing {} tasks (Status: Completed={completion}) ---\n", shown.len());
    for todo in shown {
        let mark = if todo.completed { "[✓]" } else { "[ ]" };
        let _ = writeln!(out, "{mark} {}", todo.title);
    }
    out
}

/// A reading as the service sent it; whole values keep their `.0` (`20.0`, not `20`).
pub fn reading(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Two decimals with `,` between thousands, e.g. `1,234,567.89`.
pub fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.001 rounds to zero and prints unsigned.
    let nonzero = fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let sign = if value < 0.0 && nonzero { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}
