//! End-to-end wizard scenarios exercised through the public API.
//!
//! Covers the full flows a user would drive: a regular sitting selecting all
//! sections, the capacity-exceeded advisory, the resit roster path, and
//! switching exam types midway. The sink-facing contract (update with the
//! merged config before next, nothing on a closed gate) is asserted at the
//! step-controller level.

use examplan::{
    CapacityStatus, Catalog, ExamPath, ExamPathSelector, ExamType, RosterFile,
    SectionCapacityValidator, StepSink, WizardConfig, WizardStep,
};

/// Records every sink call so tests can assert ordering and payloads.
#[derive(Default)]
struct RecordingSink {
    updates: Vec<WizardConfig>,
    calls: Vec<&'static str>,
}

impl StepSink for RecordingSink {
    fn update(&mut self, config: &WizardConfig) {
        self.updates.push(config.clone());
        self.calls.push("update");
    }
    fn next(&mut self) {
        self.calls.push("next");
    }
    fn previous(&mut self) {
        self.calls.push("previous");
    }
}

#[test]
fn regular_flow_with_all_sections_completes() {
    let catalog = Catalog::default();
    let mut sink = RecordingSink::default();

    // Step 1: regular sitting for BIT year 1.
    let mut selector = ExamPathSelector::new();
    selector.choose(ExamType::Regular);
    selector.select_program("bit");
    selector.select_year("1");
    assert!(selector.commit(&WizardConfig::default(), &mut sink));

    // Step 2: every section; 473 students against a 500 ceiling.
    let after_path = sink.updates.last().unwrap().clone();
    let mut validator = SectionCapacityValidator::new();
    validator.select_all(&catalog);
    assert_eq!(
        validator.status(&catalog),
        CapacityStatus::Within {
            sections: 12,
            students: 473,
        }
    );
    assert!(validator.commit(&catalog, &after_path, &mut sink));

    assert_eq!(sink.calls, vec!["update", "next", "update", "next"]);

    let final_config = sink.updates.last().unwrap();
    assert_eq!(
        final_config.exam_path,
        Some(ExamPath::Regular {
            program: "bit".to_string(),
            year: "1".to_string(),
        })
    );
    assert_eq!(
        final_config.sections.as_ref().map(Vec::len),
        Some(catalog.sections.len())
    );
}

#[test]
fn over_capacity_selection_blocks_until_reduced() {
    let mut catalog = Catalog::default();
    catalog.room_capacity = 100;

    let mut validator = SectionCapacityValidator::new();
    validator.toggle("C1"); // 45
    validator.toggle("C2"); // 42, total 87
    assert!(validator.can_continue(&catalog));

    validator.toggle("C3"); // 38, total 125
    assert_eq!(
        validator.status(&catalog),
        CapacityStatus::Exceeded {
            students: 125,
            capacity: 100,
        }
    );

    let mut sink = RecordingSink::default();
    assert!(!validator.commit(&catalog, &WizardConfig::default(), &mut sink));
    assert!(sink.calls.is_empty());

    // Deselecting one section reopens the gate.
    validator.toggle("C3");
    assert!(validator.commit(&catalog, &WizardConfig::default(), &mut sink));
    assert_eq!(sink.calls, vec!["update", "next"]);
}

#[test]
fn resit_flow_emits_roster_and_no_program_fields() {
    let catalog = Catalog::default();
    let mut sink = RecordingSink::default();

    let mut selector = ExamPathSelector::new();
    selector.choose(ExamType::Resit);
    assert!(!selector.can_continue());

    selector.bind_roster(RosterFile::new("/data/rosters/resit_2026.xlsx"));
    assert!(selector.commit(&WizardConfig::default(), &mut sink));

    let after_path = sink.updates.last().unwrap().clone();
    let mut validator = SectionCapacityValidator::new();
    validator.toggle("C1");
    assert!(validator.commit(&catalog, &after_path, &mut sink));

    let json = serde_json::to_value(sink.updates.last().unwrap()).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj["examType"], "resit");
    assert_eq!(obj["uploadedFile"], "/data/rosters/resit_2026.xlsx");
    assert_eq!(obj["sections"], serde_json::json!(["C1"]));
    assert!(!obj.contains_key("program"));
    assert!(!obj.contains_key("year"));
}

#[test]
fn switching_exam_type_discards_the_other_branch() {
    let mut selector = ExamPathSelector::new();
    selector.choose(ExamType::Regular);
    selector.select_program("bba");
    selector.select_year("2");
    assert!(selector.can_continue());

    selector.choose(ExamType::Resit);
    assert!(!selector.can_continue());
    assert_eq!(selector.selected_program(), None);

    // Switching back starts the regular branch from scratch.
    selector.choose(ExamType::Regular);
    assert_eq!(selector.selected_program(), None);
    assert_eq!(selector.selected_year(), None);
    assert!(!selector.can_continue());
}

#[test]
fn gate_truth_table_for_exam_path() {
    let cases: &[(Option<ExamType>, bool, bool, bool, bool)] = &[
        // (type, program, year, roster, expected gate)
        (None, false, false, false, false),
        (Some(ExamType::Regular), false, false, false, false),
        (Some(ExamType::Regular), true, false, false, false),
        (Some(ExamType::Regular), false, true, false, false),
        (Some(ExamType::Regular), true, true, false, true),
        (Some(ExamType::Resit), false, false, false, false),
        (Some(ExamType::Resit), false, false, true, true),
    ];

    for &(exam_type, program, year, roster, expected) in cases {
        let mut selector = ExamPathSelector::new();
        if let Some(t) = exam_type {
            selector.choose(t);
        }
        if program {
            selector.select_program("bit");
        }
        if year {
            selector.select_year("1");
        }
        if roster {
            selector.bind_roster(RosterFile::new("/tmp/resit.csv"));
        }
        assert_eq!(
            selector.can_continue(),
            expected,
            "case {:?}",
            (exam_type, program, year, roster)
        );
    }
}

#[test]
fn going_back_preserves_committed_config() {
    let config = WizardConfig {
        exam_path: Some(ExamPath::Regular {
            program: "bit".to_string(),
            year: "3".to_string(),
        }),
        sections: Some(vec!["C1".to_string(), "C2".to_string()]),
    };

    // Re-entering a step rebuilds its ephemeral state from the config.
    let selector = ExamPathSelector::from_config(&config);
    assert_eq!(selector.selected_program(), Some("bit"));
    assert_eq!(selector.selected_year(), Some("3"));

    let validator = SectionCapacityValidator::from_config(&config);
    assert!(validator.is_selected("C1"));
    assert!(validator.is_selected("C2"));
    assert_eq!(validator.selected_count(), 2);
}

#[test]
fn step_sequence_is_linear_and_bounded() {
    let mut step = WizardStep::default();
    assert_eq!(step, WizardStep::ExamPath);
    assert!(!step.can_go_back());

    step = step.next().unwrap();
    assert_eq!(step, WizardStep::Sections);
    step = step.next().unwrap();
    assert_eq!(step, WizardStep::Summary);
    assert_eq!(step.next(), None);

    assert_eq!(step.previous(), Some(WizardStep::Sections));
}

#[test]
fn emitted_json_for_regular_flow_has_no_roster_key() {
    let catalog = Catalog::default();
    let mut sink = RecordingSink::default();

    let mut selector = ExamPathSelector::new();
    selector.choose(ExamType::Regular);
    selector.select_program("bba");
    selector.select_year("2");
    selector.commit(&WizardConfig::default(), &mut sink);

    let after_path = sink.updates.last().unwrap().clone();
    let mut validator = SectionCapacityValidator::new();
    validator.toggle("C3");
    validator.toggle("C4");
    validator.commit(&catalog, &after_path, &mut sink);

    let json = serde_json::to_value(sink.updates.last().unwrap()).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj["examType"], "regular");
    assert_eq!(obj["program"], "bba");
    assert_eq!(obj["year"], "2");
    assert_eq!(obj["sections"], serde_json::json!(["C3", "C4"]));
    assert!(!obj.contains_key("uploadedFile"));
}
