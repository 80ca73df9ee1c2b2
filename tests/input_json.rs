use anyhow::Result;
use camino::Utf8PathBuf;
use fpgabin::memory::MemoryType;
use fpgabin::MemoryArrays;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_parse_snake_case_keys() -> Result<()> {
    let arrays: MemoryArrays = serde_json::from_str(r#"{ "register": [1, 2], "clock_level_voltage": [] }"#)?;
    assert_eq!(arrays.get(MemoryType::Register), Some(&[1i128, 2][..]));
    assert_eq!(arrays.get(MemoryType::ClockLevelVoltage), Some(&[][..]));
    assert_eq!(arrays.get(MemoryType::Sequence), None);
    Ok(())
}

#[test]
fn test_parse_legacy_keys() -> Result<()> {
    let arrays: MemoryArrays = serde_json::from_str(
        r#"{ "REG_MEM": [1], "SEQ_MEM": [2], "PRG_MEM": [3], "HSK_SEL_MEM": [4], "VOLT_MEM": [5] }"#,
    )?;
    for (t, v) in MemoryType::ALL.into_iter().zip(1i128..) {
        assert_eq!(arrays.get(t), Some(&[v][..]));
    }
    Ok(())
}

#[test]
fn test_unknown_key_rejected() {
    assert!(serde_json::from_str::<MemoryArrays>(r#"{ "registers": [1] }"#).is_err());
}

#[test]
fn test_negative_and_u64_values_parse() -> Result<()> {
    let arrays: MemoryArrays =
        serde_json::from_str(r#"{ "program": [-1, 18446744073709551615] }"#)?;
    assert_eq!(arrays.program, Some(vec![-1, u64::MAX as i128]));
    Ok(())
}

#[test]
fn test_from_json_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, r#"{{ "housekeeping": [0, 1, 2, 3] }}"#)?;
    let path = Utf8PathBuf::try_from(file.path().to_path_buf())?;
    let arrays = MemoryArrays::from_json_file(&path)?;
    assert_eq!(arrays.housekeeping, Some(vec![0, 1, 2, 3]));
    assert!(arrays.register.is_none());
    Ok(())
}
