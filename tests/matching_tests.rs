//! End-to-end matching tests against the embedded catalog
//!
//! These drive the public API the way a caller would: build a symptom set,
//! rank or score clusters, and check the documented scenarios and properties.

use std::io::Write;

use symptom_cluster::api::{
    create_cluster_exploration_result, get_all_symptom_clusters, get_symptom_cluster,
    match_symptoms_to_all_clusters, match_symptoms_to_cluster,
};
use symptom_cluster::catalog::store::CatalogError;
use symptom_cluster::matching::engine::ConfigError;
use symptom_cluster::matching::similarity::similarity;
use symptom_cluster::{
    ClusterCatalog, Confidence, MatchQuality, MatchingConfig, MatchingEngine, UserSymptomSet,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn sample_sets() -> Vec<UserSymptomSet> {
    vec![
        UserSymptomSet::default(),
        UserSymptomSet::new(["fatigue"]),
        UserSymptomSet::new(["central obesity", "elevated blood pressure", "fatigue"]),
        UserSymptomSet::new(["nausea", "photophobia", "phonophobia", "aura"]),
        UserSymptomSet::new(["orthopnea", "peripheral edema", "dyspnea on exertion"]),
        UserSymptomSet::new(["headaches", "sleep disturbance", "widespread musculoskeletal pain"])
            .with_triggers(["stress"]),
        UserSymptomSet::new(["recurrent abdominal pain", "bloating"]).with_triggers(["stress"]),
    ]
}

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn test_metabolic_exact_and_substring_match() {
    let cluster = get_symptom_cluster("metabolic-syndrome").unwrap();
    let symptoms = UserSymptomSet::new(["central obesity", "elevated blood pressure", "fatigue"]);

    let result = match_symptoms_to_cluster(&symptoms, cluster);

    assert!(result.missing_required.is_empty());
    assert_eq!(
        result.missing_major,
        vec![
            "Elevated fasting glucose",
            "High triglycerides",
            "Low HDL cholesterol"
        ]
    );
    assert_close(result.match_score, 0.5 + 0.3 * 0.25 + 0.2 * (3.0 / 8.0));
    assert_eq!(result.confidence, Confidence::Moderate);

    assert_eq!(result.matched_symptoms.len(), 3);
    let obesity = &result.matched_symptoms[0];
    assert_eq!(obesity.user_symptom, "central obesity");
    assert_eq!(obesity.match_quality, MatchQuality::Exact);
    assert_close(obesity.similarity, 0.8);

    assert_eq!(
        result.explanation,
        "Symptoms partially match Metabolic Syndrome pattern. \
         Could also have: Elevated fasting glucose, High triglycerides, Low HDL cholesterol."
    );
}

#[test]
fn test_empty_input_against_every_cluster() {
    let empty = UserSymptomSet::default();

    for cluster in get_all_symptom_clusters() {
        let result = match_symptoms_to_cluster(&empty, cluster);
        let required: Vec<String> = cluster
            .symptoms
            .iter()
            .filter(|s| s.requirement == symptom_cluster::Requirement::Required)
            .map(|s| s.symptom.clone())
            .collect();

        assert!(result.matched_symptoms.is_empty());
        assert_eq!(result.missing_required, required);
        assert_close(result.match_score, 0.0);

        let expected = if required.is_empty() {
            Confidence::Possible
        } else {
            Confidence::Low
        };
        assert_eq!(result.confidence, expected, "cluster {}", cluster.cluster_id);
    }
}

#[test]
fn test_unknown_cluster_exploration() {
    assert!(create_cluster_exploration_result("does-not-exist", None).is_none());
    assert!(create_cluster_exploration_result(
        "does-not-exist",
        Some(&UserSymptomSet::new(["fatigue"]))
    )
    .is_none());
}

#[test]
fn test_lookup_by_id() {
    assert_eq!(
        get_symptom_cluster("fibromyalgia-syndrome").unwrap().name,
        "Fibromyalgia"
    );
    assert!(get_symptom_cluster("Fibromyalgia").is_none());
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_scores_stay_in_range() {
    for symptoms in sample_sets() {
        for cluster in get_all_symptom_clusters() {
            let score = match_symptoms_to_cluster(&symptoms, cluster).match_score;
            assert!((0.0..=1.0).contains(&score), "score {score} out of range");
        }
    }
}

#[test]
fn test_matching_is_deterministic() {
    for symptoms in sample_sets() {
        assert_eq!(
            match_symptoms_to_all_clusters(&symptoms),
            match_symptoms_to_all_clusters(&symptoms)
        );

        let first = serde_json::to_string(&match_symptoms_to_all_clusters(&symptoms)).unwrap();
        let second = serde_json::to_string(&match_symptoms_to_all_clusters(&symptoms)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_missing_required_caps_confidence_at_low() {
    for symptoms in sample_sets() {
        for cluster in get_all_symptom_clusters() {
            let result = match_symptoms_to_cluster(&symptoms, cluster);
            if !result.missing_required.is_empty() {
                assert_eq!(result.confidence, Confidence::Low);
            }
        }
    }
}

#[test]
fn test_ranked_results_are_sorted() {
    for symptoms in sample_sets() {
        let results = match_symptoms_to_all_clusters(&symptoms);
        for pair in results.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }
}

#[test]
fn test_similarity_bounds() {
    let texts = [
        "Fatigue",
        "fatigue",
        "Profound fatigue lasting >6 months",
        "Sleep disturbance",
        "Unrefreshing sleep",
        "Bloating/distension",
        "",
    ];

    for a in texts {
        for b in texts {
            let s = similarity(a, b);
            assert!(
                s == 0.0 || s == 0.8 || s == 1.0 || (s > 0.0 && s <= 0.5),
                "similarity({a:?}, {b:?}) = {s}"
            );
            assert_close(s, similarity(b, a));
        }
        if !a.is_empty() {
            assert_close(similarity(a, a), 1.0);
        }
    }
}

// ============================================================================
// Ranking
// ============================================================================

#[test]
fn test_single_symptom_ranks_shared_clusters() {
    let results = match_symptoms_to_all_clusters(&UserSymptomSet::new(["fatigue"]));
    let ids: Vec<&str> = results.iter().map(|r| r.cluster_id.as_str()).collect();

    assert_eq!(
        ids,
        vec![
            "heart-failure-syndrome",
            "migraine-syndrome",
            "chronic-fatigue-syndrome",
            "fibromyalgia-syndrome",
            "metabolic-syndrome"
        ]
    );
    assert_eq!(results[0].confidence, Confidence::Moderate);

    // Migraine has no required tier, so it ranks on the required weight alone
    assert!(results[1].matched_symptoms.is_empty());
    assert_close(results[1].match_score, 0.5);
    assert_eq!(results[1].confidence, Confidence::Moderate);
}

#[test]
fn test_heart_failure_without_required_symptoms() {
    let symptoms = UserSymptomSet::new(["orthopnea", "peripheral edema", "dyspnea on exertion"]);
    let results = match_symptoms_to_all_clusters(&symptoms);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].cluster_id.as_str(), "heart-failure-syndrome");
    assert_eq!(results[1].cluster_id.as_str(), "migraine-syndrome");
    assert_close(results[0].match_score, 0.5 + 0.3 * 0.6 + 0.2 * (3.0 / 8.0));
    assert_eq!(results[0].confidence, Confidence::High);
    assert_eq!(
        results[0].missing_major,
        vec!["Paroxysmal nocturnal dyspnea", "Fatigue"]
    );
}

#[test]
fn test_unmatched_input_scores_half_without_required_tier() {
    let migraine = get_symptom_cluster("migraine-syndrome").unwrap();
    let result = match_symptoms_to_cluster(&UserSymptomSet::new(["fatigue"]), migraine);

    assert!(result.matched_symptoms.is_empty());
    assert!(result.missing_required.is_empty());
    assert_close(result.match_score, 0.5);
    assert_eq!(result.confidence, Confidence::Moderate);
    assert_eq!(result.explanation, "Symptoms partially match Migraine pattern.");
}

#[test]
fn test_unrelated_input_ranks_only_clusters_without_required_tier() {
    let results = match_symptoms_to_all_clusters(&UserSymptomSet::new(["xyzzy"]));
    let ids: Vec<&str> = results.iter().map(|r| r.cluster_id.as_str()).collect();
    assert_eq!(ids, vec!["migraine-syndrome", "heart-failure-syndrome"]);
    for result in &results {
        assert!(result.matched_symptoms.is_empty());
        assert_close(result.match_score, 0.5);
    }

    // A trigger alone is worth only the bonus, which sits under the inclusion floor
    let triggers_only = UserSymptomSet::default().with_triggers(["stress"]);
    assert!(match_symptoms_to_all_clusters(&triggers_only).is_empty());
}

#[test]
fn test_trigger_bonus_and_supporting_factors() {
    let cluster = get_symptom_cluster("migraine-syndrome").unwrap();
    let plain = UserSymptomSet::new(["nausea", "photophobia"]);
    let triggered = plain.clone().with_triggers(["bright lights", "cold"]);

    let without = match_symptoms_to_cluster(&plain, cluster);
    let with = match_symptoms_to_cluster(&triggered, cluster);

    assert_close(with.match_score - without.match_score, 0.05);
    assert!(without.supporting_factors.is_empty());
    assert_eq!(with.supporting_factors, vec!["Matching triggers: bright lights"]);
}

#[test]
fn test_find_matches_limit() {
    let catalog = ClusterCatalog::load_embedded().unwrap();
    let engine = MatchingEngine::new(&catalog);
    let symptoms = UserSymptomSet::new(["fatigue"]);

    assert_eq!(engine.find_matches(&symptoms, 2).len(), 2);
    assert_eq!(
        engine.find_best_match(&symptoms).unwrap().cluster_id.as_str(),
        "heart-failure-syndrome"
    );
}

// ============================================================================
// Exploration
// ============================================================================

#[test]
fn test_exploration_with_symptoms() {
    let symptoms = UserSymptomSet::new(["nausea", "photophobia", "phonophobia", "aura"]);
    let result = create_cluster_exploration_result("migraine-syndrome", Some(&symptoms)).unwrap();

    let match_result = result.match_result.unwrap();
    assert_eq!(match_result.confidence, Confidence::High);
    assert_eq!(match_result.matched_symptoms.len(), 4);
    assert_eq!(result.cluster.cluster_id.as_str(), "migraine-syndrome");
    assert!(result.educational_content.recognition.starts_with("Key features: "));
    assert!(!result.educational_content.recognition.contains("Aura"));
}

// ============================================================================
// Custom catalogs and configs on disk
// ============================================================================

const CUSTOM_CATALOG: &str = r#"{
    "version": "1.0.0",
    "created_at": "2024-01-01T00:00:00Z",
    "clusters": [
        {
            "cluster_id": "kidney-stone",
            "name": "Kidney Stone",
            "category": "renal",
            "symptoms": [
                {"symptom": "Flank pain", "requirement": "required"},
                {"symptom": "Hematuria", "requirement": "major"},
                {"symptom": "Nausea", "requirement": "minor"}
            ],
            "triggers": ["Dehydration"]
        }
    ]
}"#;

#[test]
fn test_custom_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CUSTOM_CATALOG.as_bytes()).unwrap();

    let catalog = ClusterCatalog::load_from_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 1);

    let engine = MatchingEngine::new(&catalog);
    let symptoms = UserSymptomSet::new(["flank pain", "hematuria"]).with_triggers(["dehydration"]);
    let best = engine.find_best_match(&symptoms).unwrap();

    assert_eq!(best.cluster_name, "Kidney Stone");
    assert_close(best.match_score, 0.5 + 0.3 + 0.2 * (2.0 / 3.0) + 0.05);
    assert_eq!(best.confidence, Confidence::High);
    assert_eq!(best.supporting_factors, vec!["Matching triggers: dehydration"]);
}

#[test]
fn test_custom_catalog_rejects_duplicate_ids() {
    let data: serde_json::Value = serde_json::from_str(CUSTOM_CATALOG).unwrap();
    let cluster = data["clusters"][0].clone();
    let doubled = serde_json::json!({
        "version": "1.0.0",
        "created_at": "2024-01-01T00:00:00Z",
        "clusters": [cluster.clone(), cluster],
    });

    let err = ClusterCatalog::from_json(&doubled.to_string()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateCluster(_)));
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"thresholds": {"inclusion_floor": 0.0, "trigger_bonus": 0.1}}"#)
        .unwrap();

    let config = MatchingConfig::load_from_file(file.path()).unwrap();
    assert_close(config.thresholds.inclusion_floor, 0.0);
    assert_close(config.thresholds.trigger_bonus, 0.1);
    assert_close(config.thresholds.match_floor, 0.3);
    assert_close(config.weights.required, 0.5);

    let catalog = ClusterCatalog::load_embedded().unwrap();
    let engine = MatchingEngine::with_config(&catalog, config);
    let triggers_only = UserSymptomSet::default().with_triggers(["stress"]);
    let ids: Vec<String> = engine
        .match_all(&triggers_only)
        .into_iter()
        .map(|r| r.cluster_id.to_string())
        .collect();

    // Every cluster listing a stress trigger now clears the zero floor
    assert_eq!(
        ids,
        vec![
            "fibromyalgia-syndrome",
            "irritable-bowel-syndrome",
            "migraine-syndrome",
            "chronic-fatigue-syndrome"
        ]
    );
}

#[test]
fn test_config_rejects_out_of_range_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"weights": {"major": 1.5}}"#).unwrap();

    let err = MatchingConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidThreshold { name: "weights.major", .. }
    ));
}
