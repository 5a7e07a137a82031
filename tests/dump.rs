use memdump::{dump_to_string, DumpConfig, MemorySpan};

#[test]
fn test_two_rows_of_four() {
    let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    let span = MemorySpan::new(0x1000, &data);

    let expected = concat!(
        "\n  Address  +3  +2  +1  +0  \n",
        "___________________________",
        "\n  0x1008  08  07  06  05  ",
        "\n  0x1004  04  03  02  01  "
    );

    assert_eq!(dump_to_string(span, &DumpConfig::default()).unwrap(), expected);
}

#[test]
fn test_empty_span_has_no_rows() {
    let span = MemorySpan::new(0x2000, &[]);
    let dump = dump_to_string(span, &DumpConfig::default()).unwrap();

    assert_eq!(
        dump,
        concat!("\n  Address  +3  +2  +1  +0  \n", "___________________________")
    );
}

#[test]
fn test_one_label_per_chunk() {
    let data: Vec<u8> = (0..32).collect();

    let aligned = MemorySpan::new(0x4000, &data);
    let dump = dump_to_string(aligned, &DumpConfig::default()).unwrap();
    assert_eq!(dump.matches("\n  0x").count(), 8);

    // An unaligned base shifts the boundaries but not their count.
    let unaligned = MemorySpan::new(0x4001, &data);
    let dump = dump_to_string(unaligned, &DumpConfig::default()).unwrap();
    assert_eq!(dump.matches("\n  0x").count(), 8);
}

#[test]
fn test_annotation_leads_the_output() {
    let config = DumpConfig {
        annotation: Some("scratch area".to_string()),
        ..DumpConfig::default()
    };
    let span = MemorySpan::new(0x30, &[0xFF; 4]);
    let dump = dump_to_string(span, &config).unwrap();

    assert!(dump.starts_with("scratch area\n  Address  "));
}

#[test]
fn test_repeat_runs_match() {
    let data = [0xDE, 0xAD, 0xBE, 0xEF];
    let span = MemorySpan::new(0x100, &data);
    let config = DumpConfig::default();

    assert_eq!(
        dump_to_string(span, &config).unwrap(),
        dump_to_string(span, &config).unwrap()
    );
}
