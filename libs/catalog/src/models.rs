//! Built-in model table.
//!
//! Entries are sorted by product name. The order is part of the public
//! contract: a [`ModelIndex`](crate::ModelIndex) is a position in this table,
//! and the last entry doubles as the fallback model for board serials.

use crate::ModelInfo;

pub(crate) static MODELS: &[ModelInfo] = &[
    // MacBook
    ModelInfo {
        product: "MacBook1,1",
        model_codes: &[
            "U9B", "U9C", "U9D", "U9F", "U9G", "U9H", "U9J", "U9K", "U9L", "U9M", "U9N", "U9P",
            "U9Q", "U9R", "U9S", "U9T", "U9U", "U9V", "U9W", "U9X", "U9Y", "U9Z",
        ],
        board_codes: &["V3G", "V3H", "V3J", "V3K", "V3L", "V3M"],
        years: &[2006],
        preferred_year: None,
        serial: "4H6130K4U9B",
    },
    ModelInfo {
        product: "MacBook10,1",
        model_codes: &["HH27", "HH28", "HH29", "HH2C", "HH2D", "HH2F", "HH2G", "HH2H"],
        board_codes: &["HJ9L", "HJ9M", "HJ9N", "HJ9P"],
        years: &[2017, 2018, 2019],
        preferred_year: None,
        serial: "FVFVC1A2HH27",
    },
    ModelInfo {
        product: "MacBook2,1",
        model_codes: &[
            "WGK", "WGL", "WGM", "WGN", "WGP", "WGQ", "WGS", "WGT", "WGU", "Y9A", "Y9B", "Y9C",
            "Y9D", "Y9E", "Y9F", "Y9G",
        ],
        board_codes: &["WGA", "WGB", "WGC"],
        years: &[2006, 2007],
        preferred_year: None,
        serial: "4H7040XBWGK",
    },
    ModelInfo {
        product: "MacBook3,1",
        model_codes: &[
            "X9A", "X9B", "X9C", "X9D", "X9E", "X9F", "X9G", "X9H", "X9J", "X9K", "XAJ", "XAK",
            "XAL",
        ],
        board_codes: &["X9U", "X9V", "X9W"],
        years: &[2007, 2008],
        preferred_year: None,
        serial: "W87481Q2X9A",
    },
    ModelInfo {
        product: "MacBook4,1",
        model_codes: &[
            "0P0", "0P1", "0P2", "0P4", "0P5", "0P6", "0P7", "0P8", "1LA", "1LB", "1LC", "1LD",
        ],
        board_codes: &["0P9", "0PA", "0PB"],
        years: &[2008, 2009],
        preferred_year: None,
        serial: "W88061A90P0",
    },
    ModelInfo {
        product: "MacBook5,1",
        model_codes: &["1AQ", "1AX", "1AY", "1AZ", "1B0", "1B1", "1B2", "1B3", "1B4"],
        board_codes: &["1B5", "1B6", "1B7"],
        years: &[2008, 2009],
        preferred_year: None,
        serial: "W88401231AX",
    },
    ModelInfo {
        product: "MacBook5,2",
        model_codes: &["4R1", "4R2", "4R3", "4R4", "4R5", "4R6", "4R7", "4R8", "4R9", "4RA"],
        board_codes: &["4RB", "4RC", "4RD"],
        years: &[2009, 2010],
        preferred_year: None,
        serial: "W89231BX4R1",
    },
    ModelInfo {
        product: "MacBook6,1",
        model_codes: &["8PZ", "8Q0", "8Q1", "8Q2", "8Q3", "8Q4", "8Q5", "8Q6"],
        board_codes: &["8Q7", "8Q8", "8Q9"],
        years: &[2009, 2010],
        preferred_year: None,
        serial: "4H9470178PZ",
    },
    ModelInfo {
        product: "MacBook7,1",
        model_codes: &["F5YH", "F5YJ", "F5YK", "F5YL", "F5YM", "F5YN", "F5YP"],
        board_codes: &["F5YQ", "F5YR", "F5YS"],
        years: &[2010, 2011],
        preferred_year: None,
        serial: "C02CF1A7F5YH",
    },
    ModelInfo {
        product: "MacBook8,1",
        model_codes: &["GCN3", "GCN4", "GCN5", "GF84", "GF85", "GF86", "GKK6", "GKK7"],
        board_codes: &["GCN0", "GCN1", "GCN2"],
        years: &[2015, 2016],
        preferred_year: None,
        serial: "C02RC3A1GCN3",
    },
    ModelInfo {
        product: "MacBook9,1",
        model_codes: &["HDNK", "HDNL", "HDNM", "HDNN", "HDNP", "HDNQ", "HDNR", "HDNT"],
        board_codes: &["HDN0", "HDN1", "HDN2"],
        years: &[2016, 2017],
        preferred_year: None,
        serial: "C02S91A2HDNK",
    },
    // MacBookAir
    ModelInfo {
        product: "MacBookAir6,2",
        model_codes: &[
            "F5N7", "F5N8", "F5YV", "F5YW", "FM72", "G083", "G084", "G2CF", "G2CG", "G2CH",
        ],
        board_codes: &["FCQ2", "FCQ3", "FCQ4"],
        years: &[2013, 2014, 2015],
        preferred_year: None,
        serial: "C02L71B1F5N7",
    },
    ModelInfo {
        product: "MacBookAir7,2",
        model_codes: &[
            "G940", "G941", "G942", "G943", "G944", "GL24", "GL25", "GLCN", "GLCP", "H3QD", "H3QF",
            "HF9X", "HF9Y", "J1WK", "J1WL", "J1WM",
        ],
        board_codes: &["G9H0", "G9H1", "G9H2"],
        years: &[2015, 2016, 2017],
        preferred_year: None,
        serial: "C02Q6014G940",
    },
    ModelInfo {
        product: "MacBookAir8,1",
        model_codes: &["JK7L", "JK7M", "JK7N", "JK7P", "JK7Q", "JK7R", "JK7T"],
        board_codes: &["JK82", "JK83", "JK84"],
        years: &[2018, 2019],
        preferred_year: None,
        serial: "FVFXC1A2JK7L",
    },
    ModelInfo {
        product: "MacBookAir9,1",
        model_codes: &["MNHP", "MNHQ", "MNHR", "MNHT", "MNHV", "MNHW"],
        board_codes: &["MNJ2", "MNJ3", "MNJ4"],
        years: &[2020],
        preferred_year: None,
        serial: "FVFC41A2MNHP",
    },
    // MacBookPro
    ModelInfo {
        product: "MacBookPro11,1",
        model_codes: &[
            "FH00", "FH01", "FH02", "FH03", "FH04", "FH05", "G3QC", "G3QD", "G3QF", "G3QG", "G3QH",
            "G3QJ", "G3QK",
        ],
        board_codes: &["FGYY", "FGYW", "FGYX"],
        years: &[2013, 2014, 2015],
        preferred_year: None,
        serial: "C02LJ41LFH00",
    },
    ModelInfo {
        product: "MacBookPro11,2",
        model_codes: &["FD56", "FD57", "FD58", "FD59", "G3QL", "G3QN", "G3QP", "G3QQ", "G3QR"],
        board_codes: &["FDRC", "FDRD", "FDRF"],
        years: &[2013, 2014, 2015],
        preferred_year: None,
        serial: "C02LJ6QSFD56",
    },
    ModelInfo {
        product: "MacBookPro15,1",
        model_codes: &["MD6M", "MD6N", "MD6P", "MD6Q", "MD6R", "MD6T", "MD6V", "MD6W"],
        board_codes: &["MD6X", "MD6Y", "MD70"],
        years: &[2018, 2019],
        preferred_year: None,
        serial: "C02XC1A2MD6M",
    },
    ModelInfo {
        product: "MacBookPro16,1",
        model_codes: &["MD7C", "MD7D", "MD7F", "MD7G", "MD7H", "MD7J", "MD7K"],
        board_codes: &["MD74", "MD75", "MD76"],
        years: &[2019, 2020],
        preferred_year: None,
        serial: "C02ZC1A2MD7C",
    },
    ModelInfo {
        product: "MacBookPro5,1",
        model_codes: &["1G0", "1G1", "1G2", "1G3", "1G4", "1G5", "1G6", "1G7", "1GA", "1GB"],
        board_codes: &["1GC", "1GD", "1GF"],
        years: &[2008, 2009],
        preferred_year: None,
        serial: "W88439FE1G0",
    },
    ModelInfo {
        product: "MacBookPro6,1",
        model_codes: &["DC79", "DC7C", "DC7D", "DC7F", "DC7G", "DC7H"],
        board_codes: &["DC7J", "DC7K", "DC7L"],
        years: &[2010, 2011],
        preferred_year: None,
        serial: "C02CG123DC79",
    },
    ModelInfo {
        product: "MacBookPro8,1",
        model_codes: &["DH2G", "DH2H", "DH2J", "DH2K", "DH2L", "DH2M", "DH2N"],
        board_codes: &["DH2P", "DH2Q", "DH2R"],
        years: &[2011, 2012],
        preferred_year: None,
        serial: "C02FC1A2DH2G",
    },
    // MacPro
    ModelInfo {
        product: "MacPro5,1",
        model_codes: &[
            "EUE", "EUF", "EUG", "EUH", "GWR", "GY5", "HF7", "HF8", "HF9", "HFA", "HFC", "HFD",
            "HFF", "HFG", "HFJ", "HFK", "HFL", "HFN", "HPV", "HPW", "HPY", "HTN", "HTP", "HTQ",
            "HTR", "HTT", "HTU", "HTV", "HTW", "HTX", "HTY",
        ],
        board_codes: &["EUJ", "EUK", "EUL"],
        years: &[2010, 2011, 2012],
        preferred_year: Some(2012),
        serial: "CK0150F7EUE",
    },
    ModelInfo {
        product: "MacPro6,1",
        model_codes: &[
            "F693", "F694", "F695", "F696", "F697", "F698", "F699", "F69A", "F69C", "F69D", "F69F",
            "F69G", "F69H", "F69J",
        ],
        board_codes: &["F69K", "F69L", "F69M"],
        years: &[2013, 2014, 2015, 2016, 2017, 2018, 2019],
        preferred_year: Some(2017),
        serial: "F5KLV0H8F693",
    },
    ModelInfo {
        product: "MacPro7,1",
        model_codes: &["P7QM", "PLXV", "PLXW", "PLXX", "PLXY", "PLXZ", "PLY0"],
        board_codes: &["K3F7", "K3F8", "K3F9"],
        years: &[2019, 2020],
        preferred_year: Some(2019),
        serial: "F5KZC1A2P7QM",
    },
    // Macmini
    ModelInfo {
        product: "Macmini6,2",
        model_codes: &["DWYM", "DWYN", "DWYP", "DWYQ", "DWYR", "DWYT", "DY3H"],
        board_codes: &["DY3J", "DY3K", "DY3L"],
        years: &[2012, 2013, 2014],
        preferred_year: None,
        serial: "C07JD041DWYN",
    },
    ModelInfo {
        product: "Macmini8,1",
        model_codes: &["JYVW", "JYVX", "JYVY", "JYW0", "JYW1", "JYW2", "JYW3"],
        board_codes: &["JYW4", "JYW5", "JYW6"],
        years: &[2018, 2019, 2020, 2021],
        preferred_year: Some(2018),
        serial: "C07XC1A2JYVW",
    },
    // Xserve
    ModelInfo {
        product: "Xserve3,1",
        model_codes: &["6HS", "6HT", "6HU", "6HV", "6HW", "6HX", "6HY", "6HZ", "6J0", "6J1"],
        board_codes: &["6J2", "6J3", "6J4"],
        years: &[2009],
        preferred_year: None,
        serial: "CK9451A26HS",
    },
    // iMac
    ModelInfo {
        product: "iMac10,1",
        model_codes: &[
            "5PC", "5PJ", "5PK", "5PL", "5PM", "5PN", "5PP", "5PQ", "5PR", "5PT", "5PU", "5PV",
            "5PW", "5PX", "5RU", "DMX", "DWR",
        ],
        board_codes: &["5PY", "5PZ", "5Q0"],
        years: &[2009, 2010],
        preferred_year: None,
        serial: "W89475QD5PC",
    },
    ModelInfo {
        product: "iMac14,1",
        model_codes: &["F8J2", "F8JC", "F8J3", "F8J4", "F8J5", "F8J6", "F8J7"],
        board_codes: &["F8J8", "F8J9", "F8JA"],
        years: &[2013, 2014],
        preferred_year: None,
        serial: "C02L13ECF8J2",
    },
    ModelInfo {
        product: "iMac14,2",
        model_codes: &["FLHH", "FLHJ", "FLHK", "FLHL", "FLHM", "FLHN", "FLHP"],
        board_codes: &["FLHQ", "FLHR", "FLHT"],
        years: &[2013, 2014],
        preferred_year: None,
        serial: "C02LC1T5FLHH",
    },
    ModelInfo {
        product: "iMac19,1",
        model_codes: &["JV3Q", "JV3R", "JV3T", "JV3V", "JV3W", "JV3X"],
        board_codes: &["JV3Y", "JV3Z", "JV40"],
        years: &[2019, 2020],
        preferred_year: None,
        serial: "C02YC1A2JV3Q",
    },
    ModelInfo {
        product: "iMac20,1",
        model_codes: &["046M", "046N", "046P", "046Q", "046R", "046T"],
        board_codes: &["046V", "046W", "046X"],
        years: &[2020, 2021],
        preferred_year: None,
        serial: "C02DC1A2046M",
    },
    // iMacPro
    ModelInfo {
        product: "iMacPro1,1",
        model_codes: &["HX87", "HX88", "HX89", "HX8C", "HX8D", "HX8F"],
        board_codes: &["J137", "J138", "J139"],
        years: &[2017, 2018, 2019],
        preferred_year: None,
        serial: "C02VC1A2HX87",
    },
];
