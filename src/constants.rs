/// Gateway path for retrieving the positions of an account
pub const GET_POSITIONS_ENDPOINT: &str = "positions/getPositions";
/// Gateway path for placing a foreign-exchange order
pub const PLACE_FX_ORDER_ENDPOINT: &str = "order/placeFxOrder";
/// Default base URL of the EMS gateway (QA environment)
pub const DEFAULT_BASE_URL: &str = "https://ems.qa2.tradingticket.com/api/v1";
/// Default timeout in seconds for gateway requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// First page of a paged result set
pub const FIRST_PAGE: i32 = 1;
/// Upper bound on pages followed by `Client::get_all_positions`
pub const MAX_POSITION_PAGES: i32 = 100;
/// User agent string used in HTTP requests to identify this client to the gateway
pub const USER_AGENT: &str = "tradeit-client/0.1.0";
/// Length of generated request identifiers
pub const REQUEST_ID_LENGTH: usize = 30;
