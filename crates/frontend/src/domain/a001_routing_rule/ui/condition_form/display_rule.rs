use contracts::enums::ConditionType;

use crate::shared::html::escape_html;

/// Piece of help text; example tokens are rendered as `<code>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpSegment {
    Text(&'static str),
    Code(&'static str),
}

/// Label, placeholder, help and input state shown for one condition type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionDisplayRule {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub help: &'static [HelpSegment],
    pub input_enabled: bool,
}

static ALWAYS: ConditionDisplayRule = ConditionDisplayRule {
    label: "Match value (not required)",
    placeholder: "No condition needed, leave blank",
    help: &[HelpSegment::Text(
        "\u{201c}All messages (always match)\u{201d} is selected, this input is ignored.",
    )],
    input_enabled: false,
};

static CONTAINS_TEXT: ConditionDisplayRule = ConditionDisplayRule {
    label: "Keyword content",
    placeholder: "Enter a keyword, e.g. ETF momentum model push",
    help: &[
        HelpSegment::Text("Enter the keyword to match. Example: enter "),
        HelpSegment::Code("ETF momentum model push"),
        HelpSegment::Text(" and any message containing this text will match."),
    ],
    input_enabled: true,
};

static CONTAINS_FIELD: ConditionDisplayRule = ConditionDisplayRule {
    label: "Field name",
    placeholder: "Enter a field name, e.g. test",
    help: &[
        HelpSegment::Text("The field name is the part to the left of "),
        HelpSegment::Code("="),
        HelpSegment::Text(". Example: if the message has "),
        HelpSegment::Code("test=abc"),
        HelpSegment::Text(", enter "),
        HelpSegment::Code("test"),
        HelpSegment::Text("; if the message has "),
        HelpSegment::Code("symbol=501018"),
        HelpSegment::Text(", enter "),
        HelpSegment::Code("symbol"),
        HelpSegment::Text("."),
    ],
    input_enabled: true,
};

impl ConditionDisplayRule {
    pub fn for_type(condition_type: ConditionType) -> &'static ConditionDisplayRule {
        match condition_type {
            ConditionType::Always => &ALWAYS,
            ConditionType::ContainsText => &CONTAINS_TEXT,
            ConditionType::ContainsField => &CONTAINS_FIELD,
        }
    }

    /// A disabled input never keeps a value
    pub fn clears_value(&self) -> bool {
        !self.input_enabled
    }

    pub fn help_html(&self) -> String {
        self.help
            .iter()
            .map(|segment| match segment {
                HelpSegment::Text(text) => escape_html(text),
                HelpSegment::Code(code) => format!("<code>{}</code>", escape_html(code)),
            })
            .collect()
    }
}
