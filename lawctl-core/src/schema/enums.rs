//! Enum vocabularies shared between DDL and documentation.
//!
//! Each vocabulary is one static list of (code, description) pairs. The
//! rendered column type and the human-readable descriptions both derive
//! from the same list, so the code set cannot drift between the two.
//! Descriptions are for documentation and tooling only; the database stores
//! the codes.

/// A named, closed set of string codes with paired descriptions
#[derive(Debug)]
pub struct EnumValues {
    /// Vocabulary name, matching the column it backs
    pub name: &'static str,
    /// (code, description) pairs; codes are what the database stores
    pub values: &'static [(&'static str, &'static str)],
}

impl EnumValues {
    /// Iterate the legal codes in declaration order
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(code, _)| *code)
    }

    /// Look up the description for a code
    pub fn description_of(&self, code: &str) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, description)| *description)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.description_of(code).is_some()
    }
}

/// Kind of law, `law_type`
pub static LAW_TYPE: EnumValues = EnumValues {
    name: "law_type",
    values: &[
        ("constitution", "Constitution, the supreme law"),
        ("statute", "Statute enacted by the national legislature"),
        ("cabinet_order", "Order issued by the cabinet"),
        ("imperial_order", "Imperial order, some still in force"),
        ("ministerial_order", "Order issued by a ministry"),
        ("national_rule", "Rule set by a national agency or court"),
        ("ordinance", "Ordinance enacted by a local assembly"),
        ("local_rule", "Rule set by the head of a local government"),
    ],
};

/// Level of government a law belongs to, `jurisdiction`
pub static JURISDICTION: EnumValues = EnumValues {
    name: "jurisdiction",
    values: &[
        ("national", "National level (legislature, cabinet)"),
        ("local", "Local level (municipalities)"),
    ],
};

/// How a party was involved in submitting a bill, `submission_role`
pub static SUBMISSION_ROLE: EnumValues = EnumValues {
    name: "submission_role",
    values: &[
        ("submitter", "Submitted the bill (member legislation)"),
        ("co_submitter", "Co-submitted with other parties"),
        ("cabinet", "Cabinet-submitted government bill"),
        ("amendment", "Moved an amendment"),
        ("none", "Not involved"),
    ],
};

/// How a party promoted a bill, `promotion_role`
pub static PROMOTION_ROLE: EnumValues = EnumValues {
    name: "promotion_role",
    values: &[
        ("coalition", "Promoted as part of the ruling coalition"),
        ("support", "Declared support without submitting"),
        ("none", "Not involved"),
    ],
};

/// How a party voted on a bill, `vote_role`
pub static VOTE_ROLE: EnumValues = EnumValues {
    name: "vote_role",
    values: &[
        ("voted_for", "Voted in favor"),
        ("voted_against", "Voted against"),
        ("abstained", "Abstained"),
        ("boycott", "Absent or boycotted deliberation"),
        ("none", "Not involved"),
    ],
};

/// All vocabularies, for tooling that needs to sweep them
pub fn all() -> [&'static EnumValues; 5] {
    [
        &LAW_TYPE,
        &JURISDICTION,
        &SUBMISSION_ROLE,
        &PROMOTION_ROLE,
        &VOTE_ROLE,
    ]
}
