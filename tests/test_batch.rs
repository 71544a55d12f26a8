mod common;
use common::spiked_recording;
use eegclean::batch::{output_dir, process_recording};
use eegclean::{io, CleanConfig};

#[test]
fn recording_writes_both_cleaned_copies() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("P1.npy");
    io::write_npy(&input, &spiked_recording(256, &[(10, 2), (200, 9)])).unwrap();
    let out_root = dir.path().join("out");

    let r = process_recording(&input, &out_root, &CleanConfig::default()).unwrap();
    assert_eq!(r.file, "P1");
    assert_eq!(r.shape, vec![256, 16]);
    assert!(r.iqr_bounds.is_some());
    assert!(r.zscore_stats.is_some());

    let out_dir = out_root.join("filtered_P1");
    assert_eq!(output_dir(&input, &out_root), out_dir);
    let iqr = io::load_npy(&out_dir.join("P1_iqr_zeroed.npy")).unwrap();
    let z = io::load_npy(&out_dir.join("P1_zscore_zeroed.npy")).unwrap();
    assert_eq!(iqr[[10, 2]], 0.0);
    assert_eq!(z[[200, 9]], 0.0);

    let per_ch = r.iqr_zeroed_per_channel.unwrap();
    assert_eq!(per_ch.len(), 16);
    assert!(per_ch[2] >= 1 && per_ch[9] >= 1);
}

#[test]
fn unreadable_recording_leaves_no_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.npy");
    std::fs::write(&input, b"\x93").unwrap();
    let out_root = dir.path().join("out");

    assert!(process_recording(&input, &out_root, &CleanConfig::default()).is_err());
    assert!(!out_root.join("filtered_bad").exists());
}

#[test]
fn rejected_config_leaves_no_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("P2.npy");
    io::write_npy(&input, &spiked_recording(32, &[(1, 1)])).unwrap();
    let out_root = dir.path().join("out");
    let cfg = CleanConfig {
        iqr_multiplier: 0.0,
        ..CleanConfig::default()
    };

    assert!(process_recording(&input, &out_root, &cfg).is_err());
    assert!(!out_root.join("filtered_P2").exists());
}
