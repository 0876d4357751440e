/// Date-list parameters: accumulate `dates[]` occurrences and read them
/// back sorted chronologically.
use qsync::{QueryStringStore, StoreOptions};

fn main() {
    let mut store = QueryStringStore::headless(StoreOptions::default());

    store.append_param("dates[]", "2024-01-03");
    store.append_param("dates[]", "2024-01-01");
    store.append_param("dates[]", "2024-01-02");

    println!("query: {}", store.query_string());
    // dates[]=2024-01-03&dates[]=2024-01-01&dates[]=2024-01-02

    println!("sorted: {:?}", store.date_list());
    // ["2024-01-01", "2024-01-02", "2024-01-03"]

    // The all-params view collapses the list key into one ordered entry
    for (key, value) in store.all_params().iter() {
        println!("{key}: {value:?}");
    }
}
