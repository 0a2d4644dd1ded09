use readiness::{
    score_dataset, ColumnMeta, DimensionKey, MetadataSnapshot, ReadinessStatus, ScoreResult,
};

fn full_snapshot() -> MetadataSnapshot {
    MetadataSnapshot {
        owner_name: Some("Data Platform".to_string()),
        owner_contact: Some("data-platform@example.com".to_string()),
        description: Some("Customer orders, one row per order".to_string()),
        columns: vec![
            ColumnMeta::documented("order_id", "Primary key"),
            ColumnMeta::documented("customer_id", "Customer reference"),
            ColumnMeta::documented("ordered_at", "Order timestamp"),
            ColumnMeta::documented("amount", "Order total"),
            ColumnMeta::documented("currency", "ISO currency code"),
        ],
        intended_use: Some("Revenue reporting".to_string()),
        limitations: Some("Refunds land a day late".to_string()),
        has_freshness_checks: Some(true),
        has_sla: Some(true),
        has_unresolved_failures: Some(false),
        had_breaking_change_recently: Some(false),
        changes_documented: Some(true),
        maintains_backward_compatibility: Some(true),
        naming_convention_compliant: Some(true),
        nullable_column_ratio: Some(0.1),
        has_legacy_columns: Some(false),
    }
}

fn owner_without_contact() -> MetadataSnapshot {
    let mut columns = vec![
        ColumnMeta::documented("id", "Identifier"),
        ColumnMeta::documented("name", "Display name"),
    ];
    columns.extend((0..8).map(|i| ColumnMeta::new(format!("col_{i}"))));
    MetadataSnapshot {
        owner_name: Some("Analytics".to_string()),
        columns,
        ..MetadataSnapshot::default()
    }
}

fn points(result: &ScoreResult, key: DimensionKey) -> (u32, u32, bool) {
    let score = result
        .dimension(key)
        .expect("every dimension should be reported");
    (score.points_awarded, score.max_points, score.measured)
}

fn assert_invariants(result: &ScoreResult) {
    assert!(result.total_score <= 100);
    assert_eq!(result.status, ReadinessStatus::from_score(result.total_score));
    assert_eq!(result.dimension_scores.len(), 6);
    for score in &result.dimension_scores {
        assert!(score.points_awarded <= score.max_points);
        assert_eq!(score.measured, score.max_points > 0);
    }
    assert_eq!(result.reasons.len(), result.actions.len());
    for (reason, action) in result.reasons.iter().zip(&result.actions) {
        assert_eq!(reason.dimension_key, action.dimension_key);
        assert_eq!(reason.points_lost, action.points_gain);
        assert!(reason.points_lost > 0);
    }
    for score in &result.dimension_scores {
        let lost: u32 = result
            .reasons
            .iter()
            .filter(|reason| reason.dimension_key == score.dimension_key)
            .map(|reason| reason.points_lost)
            .sum();
        assert_eq!(lost, score.max_points - score.points_awarded);
    }
}

#[test]
fn empty_snapshot_scores_draft() {
    let result = score_dataset(&MetadataSnapshot::default());

    assert_eq!(points(&result, DimensionKey::Ownership), (0, 15, true));
    assert_eq!(points(&result, DimensionKey::Documentation), (15, 20, true));
    assert_eq!(points(&result, DimensionKey::SchemaHygiene), (0, 0, false));
    assert_eq!(points(&result, DimensionKey::DataQuality), (0, 0, false));
    assert_eq!(points(&result, DimensionKey::Stability), (0, 0, false));
    assert_eq!(points(&result, DimensionKey::Operational), (0, 10, true));
    assert_eq!(result.total_score, 15);
    assert_eq!(result.status, ReadinessStatus::Draft);

    let codes = result
        .reasons
        .iter()
        .map(|reason| reason.reason_code.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        codes,
        vec![
            "missing_owner",
            "missing_owner_contact",
            "missing_description",
            "define_intended_use",
            "document_limitations",
        ]
    );
    assert_invariants(&result);
}

#[test]
fn full_snapshot_scores_gold() {
    let result = score_dataset(&full_snapshot());
    assert_eq!(result.total_score, 100);
    assert_eq!(result.status, ReadinessStatus::Gold);
    assert!(result.reasons.is_empty());
    assert!(result.actions.is_empty());
    assert_invariants(&result);
}

#[test]
fn partial_metadata_scores_only_measured_dimensions() {
    let result = score_dataset(&owner_without_contact());

    assert_eq!(points(&result, DimensionKey::Ownership), (10, 15, true));
    assert_eq!(points(&result, DimensionKey::Documentation), (5, 20, true));
    assert_eq!(points(&result, DimensionKey::SchemaHygiene), (0, 0, false));
    assert_eq!(points(&result, DimensionKey::DataQuality), (0, 0, false));
    assert_eq!(points(&result, DimensionKey::Stability), (0, 0, false));
    assert_eq!(points(&result, DimensionKey::Operational), (0, 10, true));
    assert_eq!(result.total_score, 15);
    assert_eq!(result.status, ReadinessStatus::Draft);

    let coverage = result
        .reasons
        .iter()
        .find(|reason| reason.reason_code == "insufficient_column_docs")
        .expect("coverage reason should be emitted");
    assert_eq!(coverage.points_lost, 10);
    assert!(coverage.message.contains("20%"));
    assert!(coverage.message.contains('8'));

    let action = result
        .actions
        .iter()
        .find(|action| action.action_key == "document_columns")
        .expect("coverage action should be emitted");
    assert_eq!(action.points_gain, 10);
    assert!(action.description.contains('8'));
    assert_invariants(&result);
}

#[test]
fn adding_contact_recovers_five_points() {
    let snapshot = MetadataSnapshot {
        owner_contact: Some("analytics@example.com".to_string()),
        ..owner_without_contact()
    };
    let result = score_dataset(&snapshot);

    assert_eq!(points(&result, DimensionKey::Ownership), (15, 15, true));
    assert_eq!(result.total_score, 20);
    assert_eq!(result.status, ReadinessStatus::Draft);
    assert!(!result
        .actions
        .iter()
        .any(|action| action.action_key == "add_owner_contact"));
}

#[test]
fn status_boundaries_hold_for_scored_snapshots() {
    // 100 - 5 contact - 5 description - 5 intended use = 85
    let gold_edge = MetadataSnapshot {
        owner_contact: None,
        description: None,
        intended_use: None,
        ..full_snapshot()
    };
    let result = score_dataset(&gold_edge);
    assert_eq!(result.total_score, 85);
    assert_eq!(result.status, ReadinessStatus::Gold);

    let below_gold = MetadataSnapshot {
        limitations: None,
        ..gold_edge.clone()
    };
    let result = score_dataset(&below_gold);
    assert_eq!(result.total_score, 80);
    assert_eq!(result.status, ReadinessStatus::ProductionReady);

    // 100 - 10 freshness - 10 breaking change - 5 contact - 5 description = 70
    let production_edge = MetadataSnapshot {
        owner_contact: None,
        description: None,
        has_freshness_checks: Some(false),
        had_breaking_change_recently: Some(true),
        ..full_snapshot()
    };
    let result = score_dataset(&production_edge);
    assert_eq!(result.total_score, 70);
    assert_eq!(result.status, ReadinessStatus::ProductionReady);

    // 70 - 10 owner - 5 limitations - 5 intended use = 50
    let internal_edge = MetadataSnapshot {
        owner_name: None,
        limitations: None,
        intended_use: None,
        ..production_edge
    };
    let result = score_dataset(&internal_edge);
    assert_eq!(result.total_score, 50);
    assert_eq!(result.status, ReadinessStatus::Internal);

    for (score, status) in [
        (49, ReadinessStatus::Draft),
        (50, ReadinessStatus::Internal),
        (69, ReadinessStatus::Internal),
        (70, ReadinessStatus::ProductionReady),
        (84, ReadinessStatus::ProductionReady),
        (85, ReadinessStatus::Gold),
    ] {
        assert_eq!(ReadinessStatus::from_score(score), status, "score {score}");
    }
}

#[test]
fn scoring_is_deterministic() {
    let snapshot = owner_without_contact();
    let first = score_dataset(&snapshot);
    let second = score_dataset(&snapshot);
    assert_eq!(first, second);
}

#[test]
fn unmeasured_signals_leave_totals_unchanged() {
    let base = owner_without_contact();
    let measured_partially = MetadataSnapshot {
        has_sla: Some(true),
        ..base.clone()
    };
    let result = score_dataset(&measured_partially);

    assert_eq!(points(&result, DimensionKey::DataQuality), (5, 5, true));
    assert_eq!(
        result.total_score,
        score_dataset(&base).total_score + 5,
        "only the measured signal should count"
    );
}

#[test]
fn improving_a_signal_never_lowers_the_score() {
    let base = MetadataSnapshot {
        columns: vec![ColumnMeta::new("order_id"), ColumnMeta::new("amount")],
        has_freshness_checks: Some(false),
        has_sla: Some(false),
        has_unresolved_failures: Some(true),
        had_breaking_change_recently: Some(true),
        changes_documented: Some(false),
        maintains_backward_compatibility: Some(false),
        naming_convention_compliant: Some(false),
        nullable_column_ratio: Some(0.9),
        has_legacy_columns: Some(true),
        ..MetadataSnapshot::default()
    };
    let base_result = score_dataset(&base);
    assert_eq!(base_result.total_score, 5);
    assert_invariants(&base_result);

    let improvements: Vec<(&str, MetadataSnapshot)> = vec![
        (
            "owner_name",
            MetadataSnapshot {
                owner_name: Some("Ops".to_string()),
                ..base.clone()
            },
        ),
        (
            "owner_contact",
            MetadataSnapshot {
                owner_contact: Some("ops@example.com".to_string()),
                ..base.clone()
            },
        ),
        (
            "description",
            MetadataSnapshot {
                description: Some("Daily order facts".to_string()),
                ..base.clone()
            },
        ),
        (
            "columns",
            MetadataSnapshot {
                columns: vec![
                    ColumnMeta::documented("order_id", "Primary key"),
                    ColumnMeta::documented("amount", "Order total"),
                ],
                ..base.clone()
            },
        ),
        (
            "naming_convention_compliant",
            MetadataSnapshot {
                naming_convention_compliant: Some(true),
                ..base.clone()
            },
        ),
        (
            "nullable_column_ratio",
            MetadataSnapshot {
                nullable_column_ratio: Some(0.2),
                ..base.clone()
            },
        ),
        (
            "has_legacy_columns",
            MetadataSnapshot {
                has_legacy_columns: Some(false),
                ..base.clone()
            },
        ),
        (
            "has_freshness_checks",
            MetadataSnapshot {
                has_freshness_checks: Some(true),
                ..base.clone()
            },
        ),
        (
            "has_sla",
            MetadataSnapshot {
                has_sla: Some(true),
                ..base.clone()
            },
        ),
        (
            "has_unresolved_failures",
            MetadataSnapshot {
                has_unresolved_failures: Some(false),
                ..base.clone()
            },
        ),
        (
            "had_breaking_change_recently",
            MetadataSnapshot {
                had_breaking_change_recently: Some(false),
                ..base.clone()
            },
        ),
        (
            "changes_documented",
            MetadataSnapshot {
                changes_documented: Some(true),
                ..base.clone()
            },
        ),
        (
            "maintains_backward_compatibility",
            MetadataSnapshot {
                maintains_backward_compatibility: Some(true),
                ..base.clone()
            },
        ),
        (
            "intended_use",
            MetadataSnapshot {
                intended_use: Some("Finance dashboards".to_string()),
                ..base.clone()
            },
        ),
        (
            "limitations",
            MetadataSnapshot {
                limitations: Some("No refunds".to_string()),
                ..base.clone()
            },
        ),
    ];
    for (signal, improved) in &improvements {
        let result = score_dataset(improved);
        assert!(
            result.total_score > base_result.total_score,
            "improving {signal} should raise the score"
        );
        assert_invariants(&result);
    }
}

#[test]
fn failed_checks_use_stable_reason_codes() {
    let snapshot = MetadataSnapshot {
        naming_convention_compliant: Some(false),
        nullable_column_ratio: Some(0.75),
        has_legacy_columns: Some(true),
        has_freshness_checks: Some(false),
        has_sla: Some(false),
        has_unresolved_failures: Some(true),
        had_breaking_change_recently: Some(true),
        changes_documented: Some(false),
        maintains_backward_compatibility: Some(false),
        ..MetadataSnapshot::default()
    };
    let result = score_dataset(&snapshot);

    let codes = result
        .reasons
        .iter()
        .map(|reason| reason.reason_code.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        codes,
        vec![
            "missing_owner",
            "missing_owner_contact",
            "missing_description",
            "fix_naming",
            "reduce_nullable_columns",
            "remove_legacy_columns",
            "add_quality_checks",
            "define_sla",
            "resolve_failures",
            "prevent_breaking_changes",
            "add_changelog",
            "maintain_compatibility",
            "define_intended_use",
            "document_limitations",
        ]
    );

    let keys = result
        .actions
        .iter()
        .map(|action| action.action_key.as_str())
        .collect::<Vec<_>>();
    assert_eq!(&keys[3..], &codes[3..]);
    assert_invariants(&result);
}

#[test]
fn malformed_values_are_normalized() {
    let snapshot: MetadataSnapshot = serde_json::from_str(
        r#"{
            "owner_name": "   ",
            "has_sla": "unknown",
            "has_freshness_checks": "yes",
            "nullable_column_ratio": 3.5
        }"#,
    )
    .expect("lenient snapshot should parse");
    let result = score_dataset(&snapshot);

    assert_eq!(points(&result, DimensionKey::Ownership), (0, 15, true));
    assert_eq!(points(&result, DimensionKey::DataQuality), (10, 10, true));
    assert_eq!(points(&result, DimensionKey::SchemaHygiene), (0, 5, true));
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.reason_code == "reduce_nullable_columns"));
    assert_invariants(&result);
}

#[test]
fn actions_sort_by_gain_then_key() {
    let result = score_dataset(&MetadataSnapshot::default());
    let keys = result
        .actions_by_gain()
        .into_iter()
        .map(|action| action.action_key.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        keys,
        vec![
            "assign_owner",
            "add_description",
            "add_owner_contact",
            "define_intended_use",
            "document_limitations",
        ]
    );
}
