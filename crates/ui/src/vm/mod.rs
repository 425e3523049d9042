mod offer_vm;
mod summary_vm;
mod time_fmt;

pub use offer_vm::{OfferVm, map_offers};
pub use summary_vm::{StatCardsVm, SummaryRowVm, map_stat_cards, map_summary_rows};
pub use time_fmt::format_fetched_at;
