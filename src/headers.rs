use http_client::Request;

/// Common Chrome user agent string for all requests
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/138.0.0.0 Safari/537.36";

/// Common Chrome headers for security info
const SEC_CH_UA: &str =
    "\"Not)A;Brand\";v=\"8\", \"Chromium\";v=\"138\", \"Google Chrome\";v=\"138\"";
const SEC_CH_UA_MOBILE: &str = "?0";
const SEC_CH_UA_PLATFORM: &str = "\"Linux\"";

/// Add browser headers to a channel page GET request
pub fn add_page_headers(request: &mut Request) {
    let _ = request.insert_header("User-Agent", USER_AGENT);
    let _ = request.insert_header(
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7"
    );
    let _ = request.insert_header("Accept-Language", "en-US,en;q=0.9");
    let _ = request.insert_header("Connection", "keep-alive");
    let _ = request.insert_header("Upgrade-Insecure-Requests", "1");
    let _ = request.insert_header("sec-ch-ua", SEC_CH_UA);
    let _ = request.insert_header("sec-ch-ua-mobile", SEC_CH_UA_MOBILE);
    let _ = request.insert_header("sec-ch-ua-platform", SEC_CH_UA_PLATFORM);
}
