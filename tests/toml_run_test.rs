use numlist::config::toml_config::TomlConfig;
use numlist::utils::validation::Validate;
use numlist::{ClassifyEngine, LocalSink, SimplePipeline};
use tempfile::TempDir;

#[test]
fn test_end_to_end_toml_run_with_multiple_jobs() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("reports");
    let output_str = output_path.to_str().unwrap().to_string();

    let toml_content = format!(
        r#"
[run]
name = "integration"
description = "Integration run"
version = "1.0"

[[jobs]]
name = "odds"
bound = 10
category = "odd"

[[jobs]]
bound = 30
category = "perfect"

[[jobs]]
bound = 10
category = "fibonacci"

[output]
path = "{}"
formats = ["text", "csv"]
"#,
        output_str.replace('\\', "/")
    );

    let config_path = temp_dir.path().join("numlist.toml");
    std::fs::write(&config_path, toml_content).unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    config.validate().unwrap();

    let sink = LocalSink::new(config.output_path().to_string());
    let pipeline = SimplePipeline::new(sink, config);
    let destination = ClassifyEngine::new(pipeline).run().unwrap();
    assert_eq!(destination, output_str);

    // Three jobs times two formats.
    let mut files: Vec<String> = std::fs::read_dir(&output_path)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    files.sort();
    assert_eq!(
        files,
        vec![
            "fibonacci_10.csv",
            "fibonacci_10.txt",
            "odds.csv",
            "odds.txt",
            "perfect_30.csv",
            "perfect_30.txt",
        ]
    );

    let odds = std::fs::read_to_string(output_path.join("odds.txt")).unwrap();
    assert_eq!(odds, "1\n3\n5\n7\n9\n");

    let perfect = std::fs::read_to_string(output_path.join("perfect_30.txt")).unwrap();
    assert_eq!(perfect, "6\n28\n");

    let fib_csv = std::fs::read_to_string(output_path.join("fibonacci_10.csv")).unwrap();
    assert!(fib_csv.contains("fibonacci,10,8"));
}

#[test]
fn test_toml_run_without_jobs_falls_back_to_demo_job() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("reports");
    let output_str = output_path.to_str().unwrap().to_string();

    let toml_content = format!(
        r#"
[run]
name = "empty"
description = "No jobs configured"
version = "1.0"

[output]
path = "{}"
formats = ["text"]
"#,
        output_str.replace('\\', "/")
    );

    let config_path = temp_dir.path().join("numlist.toml");
    std::fs::write(&config_path, toml_content).unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    let sink = LocalSink::new(config.output_path().to_string());
    let pipeline = SimplePipeline::new(sink, config);

    ClassifyEngine::new(pipeline).run().unwrap();

    // Demo job mirrors the app default: odd numbers below 100.
    let text = std::fs::read_to_string(output_path.join("odd_100.txt")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 50);
    assert_eq!(lines[0], "1");
    assert_eq!(lines[49], "99");
}

#[test]
fn test_toml_run_with_bad_category_never_reaches_the_sink() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("reports");

    let toml_content = format!(
        r#"
[run]
name = "bad"
description = "Bad category"
version = "1.0"

[[jobs]]
bound = 10
category = "triangular"

[output]
path = "{}"
formats = ["text"]
"#,
        output_path.to_str().unwrap().replace('\\', "/")
    );

    let config_path = temp_dir.path().join("numlist.toml");
    std::fs::write(&config_path, toml_content).unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    assert!(config.validate().is_err());

    let sink = LocalSink::new(config.output_path().to_string());
    let pipeline = SimplePipeline::new(sink, config);
    assert!(ClassifyEngine::new(pipeline).run().is_err());
    assert!(!output_path.exists());
}
