use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/symptom_clusters.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let clusters = catalog.get("clusters").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'clusters' field\n\
             The catalog must have a top-level 'clusters' array.\n"
        );
    });

    let clusters = clusters.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'clusters' must be an array\n\
             Got: {clusters}\n"
        );
    });

    let total_symptoms = validate_clusters(clusters);

    println!(
        "cargo:warning=Validated catalog: {} clusters, {total_symptoms} total symptoms",
        clusters.len()
    );
}

fn validate_clusters(clusters: &[serde_json::Value]) -> usize {
    let mut total_symptoms = 0;
    let mut seen_ids = HashSet::new();

    for (i, cluster) in clusters.iter().enumerate() {
        let cluster_id = cluster
            .get("cluster_id")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_cluster_fields(cluster, cluster_id, i);
        assert!(
            seen_ids.insert(cluster_id.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate cluster id '{cluster_id}' (index {i})\n"
        );
        total_symptoms += validate_cluster_symptoms(cluster, cluster_id);
    }

    total_symptoms
}

fn validate_cluster_fields(cluster: &serde_json::Value, cluster_id: &str, index: usize) {
    for field in ["cluster_id", "name", "category", "symptoms", "pathophysiology"] {
        assert!(
            cluster.get(field).is_some(),
            "\n\nCATALOG BUILD ERROR: Cluster '{cluster_id}' (index {index}) missing '{field}' field\n"
        );
    }
}

fn validate_cluster_symptoms(cluster: &serde_json::Value, cluster_id: &str) -> usize {
    let symptoms = cluster
        .get("symptoms")
        .and_then(|s| s.as_array())
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Cluster '{cluster_id}' 'symptoms' must be an array\n")
        });

    assert!(
        !symptoms.is_empty(),
        "\n\nCATALOG BUILD ERROR: Cluster '{cluster_id}' has no symptoms\n"
    );

    let mut seen = HashSet::new();
    let mut distinguishing = false;

    for (j, symptom) in symptoms.iter().enumerate() {
        let text = symptom
            .get("symptom")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Cluster '{cluster_id}' symptom {j} missing 'symptom' text\n"
                )
            });
        assert!(
            !text.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Cluster '{cluster_id}' symptom {j} has empty text\n"
        );
        assert!(
            seen.insert(text.to_string()),
            "\n\nCATALOG BUILD ERROR: Cluster '{cluster_id}' lists '{text}' more than once\n"
        );

        let requirement = symptom
            .get("requirement")
            .and_then(|v| v.as_str())
            .unwrap_or("<missing>");
        match requirement {
            "required" | "major" => distinguishing = true,
            "minor" | "supportive" => {}
            other => panic!(
                "\n\nCATALOG BUILD ERROR: Cluster '{cluster_id}' symptom '{text}' has invalid requirement '{other}'\n\
                 Expected one of: required, major, minor, supportive.\n"
            ),
        }
    }

    assert!(
        distinguishing,
        "\n\nCATALOG BUILD ERROR: Cluster '{cluster_id}' has no required or major symptom\n\
         Such a cluster can never be distinguished from the others.\n"
    );

    symptoms.len()
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/symptom_clusters.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
