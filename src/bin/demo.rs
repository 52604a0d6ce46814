use curlparse::parse;

fn main() {
    let curl_command = "curl 'http://example.com' -H 'Accept: application/json' -u admin:hunter2 -d '{\"q\":1}'";
    let result = parse(curl_command);
    println!("{:#?}", result);
}
