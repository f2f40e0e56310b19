//! Model code to marketing name lookup.

use serde::Serialize;

/// Marketing description of a model code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductDescription {
    /// 3 or 4 character model code.
    pub code: &'static str,
    /// Marketing name, e.g. `iMac (21.5-inch, Late 2013)`.
    pub name: &'static str,
}

const fn desc(code: &'static str, name: &'static str) -> ProductDescription {
    ProductDescription { code, name }
}

// Sorted by code.
pub(crate) static PRODUCTS: &[ProductDescription] = &[
    desc("046M", "iMac (Retina 5K, 27-inch, 2020)"),
    desc("046N", "iMac (Retina 5K, 27-inch, 2020)"),
    desc("046P", "iMac (Retina 5K, 27-inch, 2020)"),
    desc("0P0", "MacBook (13-inch, Early 2008)"),
    desc("0P1", "MacBook (13-inch, Early 2008)"),
    desc("0P2", "MacBook (13-inch, Early 2008)"),
    desc("1AQ", "MacBook (13-inch, Aluminum, Late 2008)"),
    desc("1AX", "MacBook (13-inch, Aluminum, Late 2008)"),
    desc("1AY", "MacBook (13-inch, Aluminum, Late 2008)"),
    desc("1G0", "MacBook Pro (15-inch, Late 2008)"),
    desc("1G1", "MacBook Pro (15-inch, Late 2008)"),
    desc("1G2", "MacBook Pro (15-inch, Late 2008)"),
    desc("4R1", "MacBook (13-inch, Mid 2009)"),
    desc("4R2", "MacBook (13-inch, Mid 2009)"),
    desc("4R3", "MacBook (13-inch, Mid 2009)"),
    desc("5PC", "iMac (21.5-inch, Late 2009)"),
    desc("5PJ", "iMac (21.5-inch, Late 2009)"),
    desc("5PK", "iMac (21.5-inch, Late 2009)"),
    desc("6HS", "Xserve (Early 2009)"),
    desc("6HT", "Xserve (Early 2009)"),
    desc("6HU", "Xserve (Early 2009)"),
    desc("8PZ", "MacBook (13-inch, Late 2009)"),
    desc("8Q0", "MacBook (13-inch, Late 2009)"),
    desc("8Q1", "MacBook (13-inch, Late 2009)"),
    desc("DC79", "MacBook Pro (17-inch, Mid 2010)"),
    desc("DC7C", "MacBook Pro (17-inch, Mid 2010)"),
    desc("DC7D", "MacBook Pro (17-inch, Mid 2010)"),
    desc("DH2G", "MacBook Pro (13-inch, Early 2011)"),
    desc("DH2H", "MacBook Pro (13-inch, Early 2011)"),
    desc("DH2J", "MacBook Pro (13-inch, Early 2011)"),
    desc("DWYM", "Mac mini (Late 2012)"),
    desc("DWYN", "Mac mini (Late 2012)"),
    desc("DWYP", "Mac mini (Late 2012)"),
    desc("EUE", "Mac Pro (Mid 2010)"),
    desc("EUF", "Mac Pro (Mid 2010)"),
    desc("EUG", "Mac Pro (Mid 2010)"),
    desc("F5N7", "MacBook Air (13-inch, Mid 2013)"),
    desc("F5N8", "MacBook Air (13-inch, Mid 2013)"),
    desc("F5YH", "MacBook (13-inch, Mid 2010)"),
    desc("F5YJ", "MacBook (13-inch, Mid 2010)"),
    desc("F5YK", "MacBook (13-inch, Mid 2010)"),
    desc("F5YV", "MacBook Air (13-inch, Mid 2013)"),
    desc("F693", "Mac Pro (Late 2013)"),
    desc("F694", "Mac Pro (Late 2013)"),
    desc("F695", "Mac Pro (Late 2013)"),
    desc("F8J2", "iMac (21.5-inch, Late 2013)"),
    desc("F8J3", "iMac (21.5-inch, Late 2013)"),
    desc("F8JC", "iMac (21.5-inch, Late 2013)"),
    desc("FD56", "MacBook Pro (Retina, 15-inch, Late 2013)"),
    desc("FD57", "MacBook Pro (Retina, 15-inch, Late 2013)"),
    desc("FD58", "MacBook Pro (Retina, 15-inch, Late 2013)"),
    desc("FH00", "MacBook Pro (Retina, 13-inch, Late 2013)"),
    desc("FH01", "MacBook Pro (Retina, 13-inch, Late 2013)"),
    desc("FH02", "MacBook Pro (Retina, 13-inch, Late 2013)"),
    desc("FLHH", "iMac (27-inch, Late 2013)"),
    desc("FLHJ", "iMac (27-inch, Late 2013)"),
    desc("FLHK", "iMac (27-inch, Late 2013)"),
    desc("G940", "MacBook Air (13-inch, Early 2015)"),
    desc("G941", "MacBook Air (13-inch, Early 2015)"),
    desc("G942", "MacBook Air (13-inch, Early 2015)"),
    desc("GCN3", "MacBook (Retina, 12-inch, Early 2015)"),
    desc("GCN4", "MacBook (Retina, 12-inch, Early 2015)"),
    desc("GCN5", "MacBook (Retina, 12-inch, Early 2015)"),
    desc("HDNK", "MacBook (Retina, 12-inch, Early 2016)"),
    desc("HDNL", "MacBook (Retina, 12-inch, Early 2016)"),
    desc("HDNM", "MacBook (Retina, 12-inch, Early 2016)"),
    desc("HH27", "MacBook (Retina, 12-inch, 2017)"),
    desc("HH28", "MacBook (Retina, 12-inch, 2017)"),
    desc("HH29", "MacBook (Retina, 12-inch, 2017)"),
    desc("HX87", "iMac Pro (2017)"),
    desc("HX88", "iMac Pro (2017)"),
    desc("HX89", "iMac Pro (2017)"),
    desc("JK7L", "MacBook Air (Retina, 13-inch, 2018)"),
    desc("JK7M", "MacBook Air (Retina, 13-inch, 2018)"),
    desc("JK7N", "MacBook Air (Retina, 13-inch, 2018)"),
    desc("JV3Q", "iMac (Retina 5K, 27-inch, 2019)"),
    desc("JV3R", "iMac (Retina 5K, 27-inch, 2019)"),
    desc("JV3T", "iMac (Retina 5K, 27-inch, 2019)"),
    desc("JYVW", "Mac mini (2018)"),
    desc("JYVX", "Mac mini (2018)"),
    desc("JYVY", "Mac mini (2018)"),
    desc("MD6M", "MacBook Pro (15-inch, 2018)"),
    desc("MD6N", "MacBook Pro (15-inch, 2018)"),
    desc("MD6P", "MacBook Pro (15-inch, 2018)"),
    desc("MD7C", "MacBook Pro (16-inch, 2019)"),
    desc("MD7D", "MacBook Pro (16-inch, 2019)"),
    desc("MD7F", "MacBook Pro (16-inch, 2019)"),
    desc("MNHP", "MacBook Air (Retina, 13-inch, 2020)"),
    desc("MNHQ", "MacBook Air (Retina, 13-inch, 2020)"),
    desc("MNHR", "MacBook Air (Retina, 13-inch, 2020)"),
    desc("P7QM", "Mac Pro (2019)"),
    desc("PLXV", "Mac Pro (2019)"),
    desc("PLXW", "Mac Pro (2019)"),
    desc("U9B", "MacBook (13-inch)"),
    desc("U9C", "MacBook (13-inch)"),
    desc("U9D", "MacBook (13-inch)"),
    desc("WGK", "MacBook (13-inch, Late 2006)"),
    desc("WGL", "MacBook (13-inch, Late 2006)"),
    desc("WGM", "MacBook (13-inch, Late 2006)"),
    desc("X9A", "MacBook (13-inch, Late 2007)"),
    desc("X9B", "MacBook (13-inch, Late 2007)"),
    desc("X9C", "MacBook (13-inch, Late 2007)"),
];
