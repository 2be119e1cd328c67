pub(crate) mod debug;
pub(crate) mod jq;
pub(crate) mod timezone;

pub(crate) use debug::{debug_log, set_debug};
pub(crate) use jq::print_json;
pub(crate) use timezone::Timezone;
