use std::collections::HashSet;

use once_cell::sync::Lazy;

/// curl options that never take a value.
///
/// Knowing these is what lets `curl -sX POST url` bind `POST` to `-X`
/// instead of treating it as a positional argument.
static BOOLEAN_FLAGS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "#", "progress-bar", "-", "next", "0", "http1.0", "http1.1", "http2",
        "no-npn", "no-alpn", "1", "tlsv1", "2", "sslv2", "3", "sslv3", "4", "ipv4", "6", "ipv6",
        "a", "append", "anyauth", "B", "use-ascii", "basic", "compressed", "create-dirs",
        "crlf", "digest", "disable-eprt", "disable-epsv", "environment", "cert-status",
        "false-start", "f", "fail", "ftp-create-dirs", "ftp-pasv", "ftp-skip-pasv-ip",
        "ftp-pret", "ftp-ssl-ccc", "ftp-ssl-control", "g", "globoff", "G", "get",
        "ignore-content-length", "i", "include", "I", "head", "j", "junk-session-cookies",
        "J", "remote-header-name", "k", "insecure", "l", "list-only", "L", "location",
        "location-trusted", "metalink", "n", "netrc", "N", "no-buffer", "netrc-file",
        "netrc-optional", "negotiate", "no-keepalive", "no-sessionid", "ntlm", "O",
        "remote-name", "oauth2-bearer", "p", "proxy-tunnel", "path-as-is", "post301", "post302",
        "post303", "proxy-anyauth", "proxy-basic", "proxy-digest", "proxy-negotiate",
        "proxy-ntlm", "q", "raw", "remote-name-all", "s", "silent", "sasl-ir", "S", "show-error",
        "ssl", "ssl-reqd", "ssl-allow-beast", "ssl-no-revoke", "socks5-gssapi-nec", "tcp-nodelay",
        "tlsv1.0", "tlsv1.1", "tlsv1.2", "tr-encoding", "trace-time", "v", "verbose", "xattr",
        "h", "help", "M", "manual", "V", "version",
    ]
    .into_iter()
    .collect()
});

pub fn is_boolean(name: &str) -> bool {
    BOOLEAN_FLAGS.contains(name)
}
