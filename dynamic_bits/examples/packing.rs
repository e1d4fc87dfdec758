use dynamic_bits::DynamicBitset;

fn main() {
    println!("=== Dynamic Bits Examples ===\n");

    // Example 1: Bit-level framing
    example_framing();

    // Example 2: Typed payloads at unaligned positions
    example_typed_values();

    // Example 3: Memory comparison
    example_memory_savings();
}

fn example_framing() {
    println!("Example 1: Packet framing, one flag at a time");

    let mut frame = DynamicBitset::new();
    frame.push(true); // version bit
    frame.push(false); // compressed payload
    frame.push(true); // checksum present

    println!(
        "  Frame holds {} bits in {} full bytes + {} tail bits",
        frame.len(),
        frame.full_byte_len(),
        frame.tail_len()
    );

    let mut cursor = frame.cursor();
    println!("  version bit:  {}", cursor.read());
    println!("  compressed:   {}", cursor.read());
    println!("  has checksum: {}", cursor.read());
    println!();
}

fn example_typed_values() {
    println!("Example 2: Typed payloads at unaligned positions");

    let mut message = DynamicBitset::new();
    message.push(true); // framing bit
    message.push_value(&0x00C0_FFEEu32);
    message.push_value(&1.5f32);

    println!("  Packed 1 flag + u32 + f32 into {} bits", message.len());

    let mut cursor = message.cursor();
    let flag = cursor.read();
    let id = cursor.extract::<u32>();
    let scale = cursor.extract::<f32>();

    println!("  flag:  {}", flag);
    println!("  id:    {:#x}", id);
    println!("  scale: {}", scale);
    println!();
}

fn example_memory_savings() {
    println!("Example 3: Memory savings for a flag sequence");

    let count = 10_000;

    // Vec<bool> spends one byte per flag
    let plain_bytes = count;

    let mut packed = DynamicBitset::with_capacity(count);
    for i in 0..count {
        packed.push(i % 7 == 0);
    }
    let packed_bytes = packed.full_byte_len() + usize::from(packed.has_partial_tail());

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / plain_bytes as f64));

    println!("  Storing {} flags:", count);
    println!("  Vec<bool>:     {} bytes", plain_bytes);
    println!("  DynamicBitset: {} bytes", packed_bytes);
    println!("  Savings:       {:.1}%", savings);
}
