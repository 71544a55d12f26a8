//! The 16-electrode sensorimotor montage the recordings were taken with.
//!
//! Column `i` of a `[T, C]` recording is electrode `ELECTRODES[i]`.

/// Electrode names in column order.
pub const ELECTRODES: [&str; 16] = [
    "FC3", "FCz", "FC4",
    "C5", "C3", "C1", "Cz", "C2", "C4", "C6",
    "CP3", "CP1", "CPz", "CP2", "CP4",
    "Pz",
];

/// Montage name of column `idx`, if it is part of the montage.
pub fn electrode_name(idx: usize) -> Option<&'static str> {
    ELECTRODES.get(idx).copied()
}

/// Column index of an electrode. Case-insensitive.
pub fn electrode_index(name: &str) -> Option<usize> {
    ELECTRODES.iter().position(|e| e.eq_ignore_ascii_case(name.trim()))
}

/// Display label for column `idx`: the montage name, or `ch{idx}` past it.
pub fn channel_label(idx: usize) -> String {
    electrode_name(idx).map_or_else(|| format!("ch{idx}"), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_indices_agree() {
        for (i, name) in ELECTRODES.iter().enumerate() {
            assert_eq!(electrode_index(name), Some(i));
        }
        assert_eq!(electrode_index("cpz"), Some(12));
        assert_eq!(electrode_index("Oz"), None);
    }

    #[test]
    fn labels_fall_back_past_montage() {
        assert_eq!(channel_label(0), "FC3");
        assert_eq!(channel_label(15), "Pz");
        assert_eq!(channel_label(16), "ch16");
        assert_eq!(electrode_name(16), None);
    }
}
