use camino::Utf8PathBuf;
use fpgabin::memory::MemoryType;
use fpgabin::readback::{read_words, to_words, verify};
use fpgabin::ReadbackError;

#[test]
fn test_to_words() {
    assert_eq!(to_words(&[0, 1, 0, 6, 0, 8, 0, 4]), Some(vec![65542, 524292]));
    assert_eq!(to_words(&[]), Some(vec![]));
    assert_eq!(to_words(&[1, 2, 3]), None);
}

#[test]
fn test_misaligned_file() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
    let path = dir.join("odd.bin");
    std::fs::write(&path, [0u8; 6]).unwrap();
    assert!(matches!(read_words(&path), Err(ReadbackError::Misaligned { len: 6, .. })));
}

#[test]
fn test_verify_checks_length() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
    std::fs::write(dir.join("CLVMem.bin"), [0u8; 8]).unwrap();
    match verify(&dir, MemoryType::ClockLevelVoltage) {
        Err(ReadbackError::LengthMismatch { expected, actual, .. }) => {
            assert_eq!(expected, 256);
            assert_eq!(actual, 8);
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(matches!(verify(&dir, MemoryType::Register), Err(ReadbackError::Io { .. })));
}
