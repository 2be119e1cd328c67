//! Section labels and the parsed log model
//!
//! A QA log carries up to five headed sections. The set is closed: the
//! label table below is the only place the heading strings live.

use serde::Serialize;

/// One of the five fixed sections of a QA log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SectionName {
    TasksDone,
    BugsFound,
    FixesVerified,
    Observations,
    NextSteps,
}

impl SectionName {
    /// All sections in document/report order
    pub(crate) const ALL: [SectionName; 5] = [
        SectionName::TasksDone,
        SectionName::BugsFound,
        SectionName::FixesVerified,
        SectionName::Observations,
        SectionName::NextSteps,
    ];

    /// Label as written after `### ` in the log, glyph included
    pub(crate) fn label(self) -> &'static str {
        match self {
            SectionName::TasksDone => "✅ Tasks Done",
            SectionName::BugsFound => "🐛 Bugs Found",
            SectionName::FixesVerified => "🛠 Fixes Verified",
            SectionName::Observations => "📈 Observations",
            SectionName::NextSteps => "🔁 Next Steps",
        }
    }

    /// Full heading line, without the trailing newline
    pub(crate) fn heading(self) -> &'static str {
        match self {
            SectionName::TasksDone => "### ✅ Tasks Done",
            SectionName::BugsFound => "### 🐛 Bugs Found",
            SectionName::FixesVerified => "### 🛠 Fixes Verified",
            SectionName::Observations => "### 📈 Observations",
            SectionName::NextSteps => "### 🔁 Next Steps",
        }
    }

    /// Single line standing in for a section with no content
    pub(crate) fn placeholder(self) -> String {
        format!("No data provided for {}", self.label())
    }

    pub(crate) fn from_heading(line: &str) -> Option<SectionName> {
        Self::ALL.into_iter().find(|name| name.heading() == line)
    }

    pub(super) fn index(self) -> usize {
        self as usize
    }
}

/// Lines extracted for every section; all five are always populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedLog {
    sections: [Vec<String>; 5],
}

impl ParsedLog {
    /// Build from raw per-section lines, filling empty sections with their placeholder
    pub(crate) fn from_sections(mut sections: [Vec<String>; 5]) -> Self {
        for name in SectionName::ALL {
            let lines = &mut sections[name.index()];
            if lines.is_empty() {
                lines.push(name.placeholder());
            }
        }
        Self { sections }
    }

    pub(crate) fn get(&self, name: SectionName) -> &[String] {
        &self.sections[name.index()]
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (SectionName, &[String])> {
        SectionName::ALL
            .into_iter()
            .map(|name| (name, self.get(name)))
    }

    /// Concatenate several sections in the given order
    pub(crate) fn concat(&self, names: &[SectionName]) -> Vec<String> {
        names
            .iter()
            .flat_map(|name| self.get(*name).iter().cloned())
            .collect()
    }

    pub(crate) fn to_view(&self) -> SectionsView<'_> {
        SectionsView {
            tasks_done: self.get(SectionName::TasksDone),
            bugs_found: self.get(SectionName::BugsFound),
            fixes_verified: self.get(SectionName::FixesVerified),
            observations: self.get(SectionName::Observations),
            next_steps: self.get(SectionName::NextSteps),
        }
    }
}

/// Serializable view of a [`ParsedLog`] with stable field order
#[derive(Debug, Serialize)]
pub(crate) struct SectionsView<'a> {
    pub(crate) tasks_done: &'a [String],
    pub(crate) bugs_found: &'a [String],
    pub(crate) fixes_verified: &'a [String],
    pub(crate) observations: &'a [String],
    pub(crate) next_steps: &'a [String],
}
