use journal_core::SortOrder;

use crate::shell::Session;

pub fn run_sort(session: &mut Session, order: Option<SortOrder>) -> String {
    let order = order.unwrap_or(session.default_sort);
    session.store.sort(order);

    match order {
        SortOrder::NewestFirst => "Sorted newest first".to_string(),
        SortOrder::OldestFirst => "Sorted oldest first".to_string(),
    }
}
