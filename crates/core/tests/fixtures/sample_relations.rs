use polars::prelude::*;

/// Two Seattle orders on 2023-01-01 (10 + 20) and one Portland order the
/// next day.
pub fn orders_frame() -> DataFrame {
    df! {
        "ORDER_TS_DATE" => &["2023-01-01", "2023-01-01", "2023-01-02"],
        "PRICE" => &[Some(10.0_f64), Some(20.0), Some(5.5)],
        "PRIMARY_CITY" => &["Seattle", "Seattle", "Portland"],
        "COUNTRY" => &["United States", "United States", "United States"],
    }
    .expect("orders frame")
}

/// One Seattle observation on 2023-01-01; Portland has no weather mapping.
pub fn weather_history_frame() -> DataFrame {
    df! {
        "POSTAL_CODE" => &["98101"],
        "COUNTRY" => &["US"],
        "DATE_VALID_STD" => &["2023-01-01"],
        "AVG_TEMPERATURE_AIR_2M_F" => &[50.0_f64],
        "TOT_PRECIPITATION_IN" => &[0.1_f64],
        "MAX_WIND_SPEED_100M_MPH" => &[12.0_f64],
    }
    .expect("weather frame")
}

pub fn postal_codes_frame() -> DataFrame {
    df! {
        "POSTAL_CODE" => &["98101"],
        "COUNTRY" => &["US"],
        "CITY_NAME" => &["Seattle"],
    }
    .expect("postal codes frame")
}

pub fn country_frame() -> DataFrame {
    df! {
        "ISO_COUNTRY" => &["US", "US"],
        "CITY" => &["Seattle", "Portland"],
        "COUNTRY" => &["United States", "United States"],
    }
    .expect("country frame")
}
