use crate::core::models::Exchange;

const fn ex(id: &'static str, name: &'static str) -> Exchange {
    Exchange { id, name }
}

/// Venue codes used in Tradier security and quote payloads.
pub static EXCHANGES: [Exchange; 22] = [
    ex("A", "NYSE MKT"),
    ex("B", "NASDAQ OMX BX"),
    ex("C", "National Stock Exchange"),
    ex("D", "FINRA ADF"),
    ex("E", "Market Independent (Generated by Nasdaq SIP)"),
    ex("F", "Mutual Funds/Money Markets (NASDAQ)"),
    ex("I", "International Securities Exchange"),
    ex("J", "Direct Edge A"),
    ex("K", "Direct Edge X"),
    ex("M", "Chicago Stock Exchange"),
    ex("N", "NYSE"),
    ex("P", "NYSE Arca"),
    ex("Q", "NASDAQ OMX"),
    ex("S", "NASDAQ Small Cap"),
    ex("T", "NASDAQ Int"),
    ex("U", "OTCBB"),
    ex("V", "OTC other"),
    ex("W", "CBOE"),
    ex("X", "NASDAQ OMX PSX"),
    ex("G", "GLOBEX"),
    ex("Y", "BATS Y-Exchange"),
    ex("Z", "BATS"),
];

/// Looks up a venue by its one-letter code.
pub fn exchange_by_id(id: &str) -> Option<&'static Exchange> {
    EXCHANGES.iter().find(|e| e.id == id)
}
