//! Terminal output for calcctl

use crate::format::{tool_lines, Row};
use crate::pages::{CalculatorForm, FieldInfo};
use calc_common::calc::{GST_SLABS, UNIVERSITIES};
use calc_common::{CategoryFilter, HealthResponse, ToolDescriptor, CATEGORY_CHOICES, NO_TOOLS_FOUND};
use owo_colors::OwoColorize;

/// Persistent banner shown above every page
pub fn print_header() {
    println!(
        "{}  {}",
        "🇮🇳 India Tools".bold().bright_magenta(),
        "Free Calculators & Tools".dimmed()
    );
    println!();
}

/// Landing page: category bar plus the filtered tool list
pub fn print_catalog(tools: &[&ToolDescriptor], search: &str, filter: CategoryFilter) {
    let selected = filter.to_string();
    let bar: Vec<String> = CATEGORY_CHOICES
        .iter()
        .map(|choice| {
            if *choice == selected {
                format!("[{}]", choice).bold().to_string()
            } else {
                choice.dimmed().to_string()
            }
        })
        .collect();
    println!("{}", bar.join("  "));
    if !search.is_empty() {
        println!("{} {}", "Search:".dimmed(), search);
    }
    println!();

    if tools.is_empty() {
        println!("{}", NO_TOOLS_FOUND);
        return;
    }

    for tool in tools {
        let lines = tool_lines(tool);
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                println!("{}", line.bold());
            } else {
                println!("{}", line.dimmed());
            }
        }
        println!();
    }
}

/// Page title and subtitle
pub fn print_page_title<F: CalculatorForm>() {
    println!("{}", F::TITLE.bold());
    println!("{}", F::SUBTITLE.dimmed());
    println!();
}

/// Inputs a page expects, for `calcctl open <path>`
pub fn print_form_help<F: CalculatorForm>(command: &str) {
    print_page_title::<F>();
    println!("Fields:");
    for FieldInfo { flag, label, hint } in F::FIELDS {
        println!("  {:<18} {} ({})", flag.cyan(), label, hint.dimmed());
    }
    println!();
    let flags: Vec<String> = F::FIELDS
        .iter()
        .map(|f| format!("{} <{}>", f.flag, f.flag.trim_start_matches("--")))
        .collect();
    println!("Usage: calcctl {} {}", command, flags.join(" "));
}

/// University options of the CGPA page
pub fn print_universities() {
    println!();
    println!("Universities:");
    for university in UNIVERSITIES.iter() {
        println!("  {:<10} {}", university.key.cyan(), university.label.dimmed());
    }
}

pub fn print_gst_slabs() {
    let slabs: Vec<String> = GST_SLABS.iter().map(|s| format!("{}%", s)).collect();
    println!();
    println!("GST slabs: {}", slabs.join("  "));
}

/// A result card
pub fn print_rows(heading: &str, rows: &[Row]) {
    println!("{}", heading.bold());
    for row in rows {
        if row.highlight {
            println!("  {:<26} {}", row.label, row.value.bright_blue().bold());
        } else {
            println!("  {:<26} {}", row.label, row.value);
        }
    }
}

pub fn print_note(note: &str) {
    println!();
    println!("  {}", note.blue());
}

/// Error banner (service message or connectivity failure)
pub fn print_error(message: &str) {
    eprintln!();
    eprintln!("⚠️  {}", message.red());
}

/// Local validation failure
pub fn print_form_error(message: &str) {
    eprintln!("{} {}", "[INVALID]".yellow(), message);
}

pub fn print_health(base_url: &str, health: &HealthResponse) {
    println!("{} {}", "[OK]".bright_green(), base_url);
    println!("  status:    {}", health.status);
    println!("  version:   {}", health.version);
    println!("  uptime:    {}s", health.uptime_seconds);
    println!("  endpoints: {}", health.endpoints.join(", "));
}
