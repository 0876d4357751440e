/// Basic store usage against an in-memory address bar.
use qsync::{MemoryBridge, ParamMatch, QueryStringStore, StoreOptions};

fn main() {
    let bridge = MemoryBridge::new("https://shop.example/catalog/shoes?view=grid&page=2#results");
    let mut store = QueryStringStore::with_bridge(bridge, StoreOptions::default());

    println!("origin: {}", store.origin()); // https://shop.example
    println!("route: {}", store.route()); // catalog/shoes
    println!("page: {}", store.first_value("page")); // 2

    // Every mutation pushes the recomputed URI to the bridge
    store.update_param("page", "3");
    store.append_param("f[]", "sale");
    store.toggle_param("open", "1");
    println!("uri: {}", store.bridge().uri());
    // https://shop.example/catalog/shoes?view=grid&page=3&f[]=sale&open=1#results

    store.remove_param(&ParamMatch::pair("f[]", "sale"), false);
    store.remove_hash();
    println!("uri: {}", store.bridge().uri());
    // https://shop.example/catalog/shoes?view=grid&page=3&open=1
}
