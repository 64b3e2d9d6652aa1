use colored::*;
use forms_validator::FormErrors;
use serde_json::json;

/// Outcome of one `validate` run, ready for printing.
pub struct FormReport<'a> {
    pub passed: bool,
    pub errors: &'a FormErrors,
    pub fields_checked: usize,
}

pub fn print_form_report(report: &FormReport<'_>, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &FormReport<'_>) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    let failures: Vec<_> = report.errors.failures().collect();
    if !failures.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, (field, message)) in failures.iter().enumerate() {
            println!("  {}. {}: {}", i + 1, field.bold(), message.red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Fields checked: {}", report.fields_checked);
    println!("  Total errors:   {}", failures.len());
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &FormReport<'_>) {
    let errors: serde_json::Map<String, serde_json::Value> = report
        .errors
        .failures()
        .map(|(field, message)| (field.to_string(), json!(message)))
        .collect();

    let output = json!({
        "passed": report.passed,
        "errors": errors,
        "summary": {
            "fields_checked": report.fields_checked,
            "error_count": errors.len(),
        }
    });

    print_json(&output);
}

pub fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => print_error(&format!("Failed to render JSON: {}", e)),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
