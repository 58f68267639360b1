use zet80_core::core::mem::{Memory, MemoryError};

#[test]
fn test_new_memory_is_zeroed() {
    let mem = Memory::new();
    assert_eq!(mem.read(0x0000), 0x00);
    assert_eq!(mem.read(0x8000), 0x00);
    assert_eq!(mem.read(0xFFFF), 0x00);
}

#[test]
fn test_byte_read_write() {
    let mut mem = Memory::new();
    mem.write(0x1234, 0xAB);
    assert_eq!(mem.read(0x1234), 0xAB);
    assert_eq!(mem.read(0x1235), 0x00, "neighbor untouched");
}

#[test]
fn test_word_access_is_little_endian() {
    let mut mem = Memory::new();
    mem.write_word(0x4000, 0x1234).unwrap();
    assert_eq!(mem.read(0x4000), 0x34);
    assert_eq!(mem.read(0x4001), 0x12);
    assert_eq!(mem.read_word(0x4000).unwrap(), 0x1234);
}

#[test]
fn test_word_at_top_of_memory_is_rejected() {
    let mut mem = Memory::new();
    assert_eq!(
        mem.read_word(0xFFFF),
        Err(MemoryError::OutOfRange {
            start: 0xFFFF,
            len: 2
        })
    );
    assert_eq!(
        mem.write_word(0xFFFF, 0x1234),
        Err(MemoryError::OutOfRange {
            start: 0xFFFF,
            len: 2
        })
    );
    assert_eq!(mem.read(0xFFFF), 0x00, "failed write stored nothing");
}

#[test]
fn test_word_at_fffe_is_fine() {
    let mut mem = Memory::new();
    mem.write_word(0xFFFE, 0xBEEF).unwrap();
    assert_eq!(mem.read(0xFFFE), 0xEF);
    assert_eq!(mem.read(0xFFFF), 0xBE);
}

#[test]
fn test_load_block() {
    let mut mem = Memory::new();
    mem.load(0x2000, &[1, 2, 3, 4]).unwrap();
    assert_eq!(mem.read(0x2000), 1);
    assert_eq!(mem.read(0x2003), 4);
}

#[test]
fn test_load_up_to_the_top() {
    let mut mem = Memory::new();
    mem.load(0xFFFE, &[0xAA, 0xBB]).unwrap();
    assert_eq!(mem.read(0xFFFF), 0xBB);
}

#[test]
fn test_load_past_the_top_is_rejected_whole() {
    let mut mem = Memory::new();
    let err = mem.load(0xFFFE, &[1, 2, 3]).unwrap_err();
    assert_eq!(
        err,
        MemoryError::OutOfRange {
            start: 0xFFFE,
            len: 3
        }
    );
    assert_eq!(mem.read(0xFFFE), 0x00, "partial bytes must not land");
    assert_eq!(mem.read(0xFFFF), 0x00);
}

#[test]
fn test_error_display() {
    let err = MemoryError::OutOfRange {
        start: 0xFFFE,
        len: 3,
    };
    assert_eq!(
        err.to_string(),
        "region 0xFFFE+3 exceeds the 64 KiB address space"
    );
}
