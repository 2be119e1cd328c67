//! Project update rendering
//!
//! The text layout is consumed downstream as-is, so headings, glyphs and
//! blank lines must stay byte-for-byte stable.

use serde::Serialize;

use crate::qa::{ParsedLog, SectionName};

/// Sections regrouped for the project update
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct ReportGroups {
    pub(crate) key_takeaways: Vec<String>,
    pub(crate) bugs: Vec<String>,
    pub(crate) progress_summary: Vec<String>,
    pub(crate) next_steps: Vec<String>,
}

impl ReportGroups {
    pub(crate) fn from_log(log: &ParsedLog) -> Self {
        Self {
            key_takeaways: log.concat(&[
                SectionName::TasksDone,
                SectionName::FixesVerified,
                SectionName::Observations,
            ]),
            bugs: log.get(SectionName::BugsFound).to_vec(),
            progress_summary: log.concat(&[SectionName::FixesVerified, SectionName::Observations]),
            next_steps: log.get(SectionName::NextSteps).to_vec(),
        }
    }
}

fn list_block(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the project update for `log`, dated `date`
pub(crate) fn render(log: &ParsedLog, date: &str) -> String {
    let groups = ReportGroups::from_log(log);
    format!(
        "### 📣 Project Update: {date}\n\
         \n\
         #### 🔑 Key Takeaways\n\
         {}\n\
         \n\
         #### 🐛 Bugs Found\n\
         {}\n\
         \n\
         #### 📊 Progress Summary\n\
         {}\n\
         \n\
         #### 🔁 Next Steps\n\
         {}\n",
        list_block(&groups.key_takeaways),
        list_block(&groups.bugs),
        list_block(&groups.progress_summary),
        list_block(&groups.next_steps),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qa::parse;

    #[test]
    fn renders_full_report() {
        let log = parse(
            "### ✅ Tasks Done\n- Smoke test\n\
             ### 🐛 Bugs Found\n- Crash on save\n\
             ### 🛠 Fixes Verified\n- Login fixed\n\
             ### 📈 Observations\n- Slow sync\n\
             ### 🔁 Next Steps\n- Retest export\n",
        );
        let expected = "### 📣 Project Update: 2024-03-01

#### 🔑 Key Takeaways
- Smoke test
- Login fixed
- Slow sync

#### 🐛 Bugs Found
- Crash on save

#### 📊 Progress Summary
- Login fixed
- Slow sync

#### 🔁 Next Steps
- Retest export
";
        assert_eq!(render(&log, "2024-03-01"), expected);
    }

    #[test]
    fn renders_placeholders_inline() {
        let report = render(&parse(""), "2026-10-16");
        let expected = "### 📣 Project Update: 2026-10-16

#### 🔑 Key Takeaways
- No data provided for ✅ Tasks Done
- No data provided for 🛠 Fixes Verified
- No data provided for 📈 Observations

#### 🐛 Bugs Found
- No data provided for 🐛 Bugs Found

#### 📊 Progress Summary
- No data provided for 🛠 Fixes Verified
- No data provided for 📈 Observations

#### 🔁 Next Steps
- No data provided for 🔁 Next Steps
";
        assert_eq!(report, expected);
    }

    #[test]
    fn groups_concatenate_in_fixed_order() {
        let log = parse(
            "### 📈 Observations\n- o\n### 🛠 Fixes Verified\n- f\n### ✅ Tasks Done\n- t\n",
        );
        let groups = ReportGroups::from_log(&log);
        assert_eq!(groups.key_takeaways, ["t", "f", "o"]);
        assert_eq!(groups.progress_summary, ["f", "o"]);
    }
}
