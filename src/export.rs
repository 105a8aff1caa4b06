use crate::models::Habit;

/// CSV rendering of the habit list: id,name,category,completions with the
/// completions cell holding a JSON-encoded date array. Downloads only; the
/// output is not re-importable.
pub fn habits_to_csv(habits: &[Habit]) -> String {
    let mut out = String::from("id,name,category,completions\n");
    for habit in habits {
        let completions =
            serde_json::to_string(&habit.completions).unwrap_or_else(|_| "[]".to_string());
        out.push_str(&habit.id.to_string());
        out.push(',');
        out.push_str(&csv_field(&habit.name));
        out.push(',');
        out.push_str(&csv_field(&habit.category));
        out.push(',');
        out.push_str(&csv_field(&completions));
        out.push('\n');
    }
    out
}

pub fn habits_to_json(habits: &[Habit]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(habits)
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn habit(name: &str, completions: Vec<NaiveDate>) -> Habit {
        Habit {
            id: 1,
            name: name.to_string(),
            category: "Coding".to_string(),
            completions,
            achievements: vec!["streak7".to_string()],
            reminder_time: None,
        }
    }

    #[test]
    fn csv_starts_with_header() {
        let out = habits_to_csv(&[]);
        assert_eq!(out, "id,name,category,completions\n");
    }

    #[test]
    fn csv_quotes_and_escapes_completions_cell() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let out = habits_to_csv(&[habit("Code daily", vec![day])]);
        let row = out.lines().nth(1).unwrap();
        assert_eq!(row, "1,Code daily,Coding,\"[\"\"2026-08-07\"\"]\"");
    }

    #[test]
    fn csv_quotes_fields_containing_commas() {
        let out = habits_to_csv(&[habit("Read, daily", vec![])]);
        let row = out.lines().nth(1).unwrap();
        assert!(row.starts_with("1,\"Read, daily\",Coding,"));
    }

    #[test]
    fn json_is_pretty_printed_array_of_full_records() {
        let day = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let out = habits_to_json(&[habit("Code daily", vec![day])]).unwrap();
        assert!(out.starts_with("[\n"));

        let parsed: Vec<Habit> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Code daily");
        assert_eq!(parsed[0].completions, vec![day]);
        assert_eq!(parsed[0].achievements, vec!["streak7"]);
    }
}
