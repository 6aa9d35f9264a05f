use std::path::Path;

use chrono::NaiveDate;

use crate::error::IoError;
use crate::workspace::NewTask;

/// Try parsing a date string with several common formats.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &[
        "%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d",
    ] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Parse a progress cell: a bare number, a "45%" style value, or one of the
/// status words quote templates tend to use.
fn parse_progress(s: &str) -> f32 {
    let s = s.trim();
    if let Ok(n) = s.trim_end_matches('%').trim().parse::<f32>() {
        return n.clamp(0.0, 100.0);
    }
    match s.to_lowercase().as_str() {
        "finished" | "done" | "complete" | "completed" | "terminado" => 100.0,
        "in progress" | "in-progress" | "started" | "en curso" => 50.0,
        _ => 0.0,
    }
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Map a normalized header to our column index:
///   0 = name, 1 = start, 2 = end, 3 = progress, 4 = resource
fn header_to_col(normalized: &str) -> Option<usize> {
    match normalized {
        "name" | "task" | "taskname" | "label" | "title" | "activity" | "partida" => Some(0),

        "start" | "startdate" | "from" | "begin" | "inicio" => Some(1),

        "end" | "enddate" | "to" | "finish" | "due" | "duedate" | "termino" => Some(2),

        "progress" | "progress%" | "status" | "state" | "avance" => Some(3),

        "resource" | "assignee" | "owner" | "crew" | "recurso" => Some(4),

        _ => None,
    }
}

/// Import tasks from a CSV file.
///
/// Auto-detects the delimiter (comma, semicolon, tab) and matches column
/// headers flexibly, including the Spanish headers the quote templates use.
/// Only a task-name column is required; rows with unparseable dates keep the
/// name and come in unscheduled, rows without a name are skipped. Returns
/// `(tasks, skipped_count)` on success.
pub fn import_tasks(path: &Path) -> Result<(Vec<NewTask>, usize), IoError> {
    // Read the whole file up front to sniff the delimiter from the first line.
    let content = std::fs::read_to_string(path)?;
    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let col_map: Vec<Option<usize>> = headers
        .iter()
        .map(|h| header_to_col(&normalize_header(h)))
        .collect();

    if !col_map.iter().any(|c| *c == Some(0)) {
        return Err(IoError::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut tasks: Vec<NewTask> = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };

        let mut task = NewTask::default();
        for (col_idx, field) in record.iter().enumerate() {
            match col_map.get(col_idx).copied().flatten() {
                Some(0) => task.name = field.trim().to_string(),
                Some(1) => task.start_plan = parse_date(field),
                Some(2) => task.end_plan = parse_date(field),
                Some(3) => task.progress = parse_progress(field),
                Some(4) => {
                    let r = field.trim();
                    task.resource = (!r.is_empty()).then(|| r.to_string());
                }
                _ => {}
            }
        }

        if task.name.is_empty() {
            skipped += 1;
            continue;
        }
        tasks.push(task);
    }

    if tasks.is_empty() {
        return Err(IoError::EmptyImport { skipped });
    }
    Ok((tasks, skipped))
}
