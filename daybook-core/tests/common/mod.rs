// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared helpers for feed integration tests.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Serves exactly one HTTP response on a random local port.
///
/// Returns the base URL to request. The listener thread answers a single
/// connection and exits.
pub fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Drain the request head; the tests only send small GETs.
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}")
}

pub const ALMANAC_OK: &str = r#"{
    "error_code": 0,
    "reason": "success",
    "result": {
        "id": "4146",
        "yangli": "2026-08-07",
        "yinli": "lunar six twenty-five",
        "wuxing": "stream water",
        "chongsha": "clash monkey north",
        "baiji": "no opening of stores",
        "jishen": "moon space",
        "yi": "bathing fishing repairs",
        "xiongshen": "small loss",
        "ji": "weddings lawsuits"
    }
}"#;

pub const WEATHER_OK: &str = r#"{
    "id": "w-1",
    "city": "Shanghai",
    "updateTime": "2026-08-07T07:35+08:00",
    "daily": [
        {
            "date": "2026-08-07",
            "text": "cloudy",
            "iconDay": "101",
            "iconNight": "151",
            "temp": "31",
            "windDir": "SE level 3"
        },
        {
            "date": "2026-08-08",
            "text": "light rain",
            "iconDay": "305",
            "iconNight": "305",
            "temp": "29",
            "windDir": "E level 2"
        }
    ]
}"#;

pub const LOTTERY_OK: &str = r#"{
    "error_code": 0,
    "reason": "success",
    "result": {
        "lottery_id": "ssq",
        "lottery_name": "double color ball",
        "lottery_res": "03,07,11,19,25,31,16",
        "lottery_no": "2026090",
        "lottery_date": "2026-08-06",
        "lottery_exdate": "2026-10-05",
        "lottery_sale_amount": "350000000",
        "lottery_pool_amount": "1200000000",
        "lottery_prize": [
            {
                "prize_name": "first prize",
                "prize_num": "7",
                "prize_amount": "7520817",
                "prize_require": "6+1"
            }
        ]
    }
}"#;
