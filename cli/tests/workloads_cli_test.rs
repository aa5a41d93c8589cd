use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn microbench(args: &[&str]) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("microbench")?;
    cmd.env_remove("MICROBENCH_CONFIG").env_remove("MICROBENCH_TRACE").args(args);
    Ok(cmd)
}

fn path_str(p: &Path) -> &str {
    p.to_str().expect("utf8 temp path")
}

#[test]
fn sort_prints_min_and_max() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("nums.bin");
    fs::write(&file, [0x01u8, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x02, 0x00, 0x00, 0x00])?;

    microbench(&["sort", path_str(&file)])?
        .assert()
        .success()
        .stdout("-1,2\n");
    Ok(())
}

#[test]
fn sort_empty_input_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("empty.bin");
    fs::write(&file, b"")?;

    microbench(&["sort", path_str(&file)])?
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("EmptyInput"));
    Ok(())
}

#[test]
fn sort_ignores_trailing_bytes_unless_strict() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("six.bin");
    fs::write(&file, [0xF9u8, 0xFF, 0xFF, 0xFF, 0xAB, 0xCD])?;

    microbench(&["sort", path_str(&file)])?
        .assert()
        .success()
        .stdout("-7,-7\n");

    microbench(&["sort", path_str(&file), "--strict-length"])?
        .assert()
        .failure()
        .stderr(predicate::str::contains("TrailingBytes"));
    Ok(())
}

#[test]
fn sort_all_equal_values() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("fives.bin");
    fs::write(&file, [0x05u8, 0x00, 0x00, 0x00].repeat(3))?;

    microbench(&["sort", path_str(&file)])?
        .assert()
        .success()
        .stdout("5,5\n");
    Ok(())
}

#[test]
fn missing_file_fails_with_path() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("absent.bin");

    microbench(&["sort", path_str(&file)])?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file").and(predicate::str::contains("absent.bin")));
    Ok(())
}

#[test]
fn csv_sums_salary_column() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("people.csv");
    fs::write(
        &file,
        "id,first_name,last_name,email,department,salary\n\
         0,First0,Last0,e0@co.com,Dept0,1000\n\
         1,First1,Last1,e1@co.com,Dept1,1137\n",
    )?;

    microbench(&["csv", path_str(&file)])?
        .assert()
        .success()
        .stdout("2137\n");
    Ok(())
}

#[test]
fn csv_missing_column_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("people.csv");
    fs::write(&file, "id,name\n1,a\n")?;

    microbench(&["csv", path_str(&file)])?
        .assert()
        .failure()
        .stderr(predicate::str::contains("column 'salary' not found"));
    Ok(())
}

#[test]
fn json_sums_value_field() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("items.json");
    fs::write(&file, r#"[{"id": 0, "value": 4}, {"id": 1, "value": 38}]"#)?;

    microbench(&["json", path_str(&file)])?
        .assert()
        .success()
        .stdout("42\n");
    Ok(())
}

#[test]
fn regex_counts_ing_words() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("text.txt");
    fs::write(&file, "walking and talking while thinking\nbring king Running\n")?;

    microbench(&["regex", path_str(&file)])?
        .assert()
        .success()
        .stdout("5\n");
    Ok(())
}

#[test]
fn regex_rejects_invalid_pattern() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("text.txt");
    fs::write(&file, "abc")?;

    microbench(&["regex", path_str(&file), "--pattern", "(unclosed"])?
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
    Ok(())
}

#[test]
fn strsearch_counts_overlaps() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("text.txt");
    fs::write(&file, "aaaa\n")?;

    microbench(&["strsearch", path_str(&file), "aa"])?
        .assert()
        .success()
        .stdout("3\n");
    Ok(())
}

#[test]
fn wc_prints_tab_separated_counts() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("text.txt");
    fs::write(&file, "b a b\nc\n")?;

    microbench(&["wc", path_str(&file)])?
        .assert()
        .success()
        .stdout("b\t2\na\t1\nc\t1\n");

    microbench(&["wc", path_str(&file), "--order", "alpha"])?
        .assert()
        .success()
        .stdout("a\t1\nb\t2\nc\t1\n");
    Ok(())
}

#[test]
fn config_file_from_env_sets_defaults() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let cfg = dir.path().join("microbench.toml");
    fs::write(&cfg, "[json]\nfield = \"n\"\n")?;
    let file = dir.path().join("items.json");
    fs::write(&file, r#"[{"value": 1, "n": 10}, {"value": 2, "n": 20}]"#)?;

    microbench(&["json", path_str(&file)])?
        .env("MICROBENCH_CONFIG", &cfg)
        .assert()
        .success()
        .stdout("30\n");
    Ok(())
}

#[test]
fn tracing_goes_to_stderr_only() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("nums.bin");
    fs::write(&file, [0x03u8, 0x00, 0x00, 0x00])?;

    microbench(&["sort", path_str(&file)])?
        .env("MICROBENCH_TRACE", "microbench_core=debug")
        .assert()
        .success()
        .stdout("3,3\n")
        .stderr(predicate::str::contains("decoded records"));
    Ok(())
}
