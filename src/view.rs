//! Rendering of trip records for browsers and terminals

use std::fmt::Write;

use crate::models::TripRecord;

/// HTML results panel for a planned trip
pub fn render_html(record: &TripRecord) -> String {
    let place = format!(
        "{}, {}",
        escape_html(&record.place.name),
        escape_html(&record.place.country)
    );

    let mut html = String::new();
    let _ = writeln!(html, "<section id=\"results\">");
    let _ = writeln!(html, "  <h2>Trip to {}</h2>", place);
    let _ = writeln!(html, "  <p>Departure: {}</p>", record.departure_date);
    let _ = writeln!(html, "  <p>Return: {}</p>", record.return_date);
    let _ = writeln!(html, "  <p>Trip Duration: {} days</p>", record.duration_days);
    let _ = writeln!(html, "  <p>Days Until Trip: {}</p>", record.days_until_departure);
    let _ = writeln!(
        html,
        "  <p>Weather Forecast ({}): {}&deg;C, {}</p>",
        record.forecast.date,
        record.forecast.temperature_celsius,
        escape_html(&record.forecast.description)
    );
    if !record.image.is_empty() {
        let _ = writeln!(
            html,
            "  <img src=\"{}\" alt=\"Image of {}\" />",
            escape_html(&record.image.url),
            escape_html(&record.place.name)
        );
    }
    html.push_str("</section>\n");
    html
}

/// Plain text summary for the command line
pub fn render_text(record: &TripRecord) -> String {
    let mut text = String::new();
    let _ = writeln!(
        text,
        "Trip to {}, {}",
        record.place.name, record.place.country
    );
    let _ = writeln!(text, "  Departure:       {}", record.departure_date);
    let _ = writeln!(text, "  Return:          {}", record.return_date);
    let _ = writeln!(text, "  Trip duration:   {} days", record.duration_days);
    let _ = writeln!(text, "  Days until trip: {}", record.days_until_departure);
    let _ = writeln!(
        text,
        "  Forecast ({}): {}°C, {}",
        record.forecast.date, record.forecast.temperature_celsius, record.forecast.description
    );
    if !record.image.is_empty() {
        let _ = writeln!(text, "  Image:           {}", record.image.url);
    }
    text
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
