//! Set, read back, delete, refill, and dump a table.

use fnv_chain_table::HashTable;
use std::io;

fn main() -> io::Result<()> {
    let mut map = HashTable::new();
    map.set("test", 3);
    println!("{:?}", map.get("test"));
    map.delete("test");
    println!("{:?}", map.get("test"));

    for i in 0..7 {
        map.set(&format!("test{i}"), i + 4);
    }
    map.dump_to(io::stdout().lock())
}
