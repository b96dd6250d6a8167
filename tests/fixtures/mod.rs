//! Shared test fixtures
#![allow(dead_code)]

/// 4096-bit RSA JWK
pub const JWK_4096: &str = r#"{"kty":"RSA","e":"AQAB","kid":"b3eeac92","n":"goToHtkVP3pxYH7s68B2d2uSTBpAm7v_4amWXxVd3UvNVtLHa8CpGRazcAyZedxyYiU9soTvobi3kFA30_IzBkZdHf5tGOO8EeJOWoCEWIGlZ79oZDMypa8KUZ0woOGdUt2Y7MIn4LJ-QgO1wOuKNvzCjGwUc1TDskAQ0pvAMH8So_NlCMzVWjwFc67upzsZQ1GmRbr-0WfDh-PZI-jzTWBHgedEX3q4JMFy0sJG1cznIXXrhTY6-1Yn3OHtfYI1oKNlZ0J3OKeCnFE_s2D4jOSpyfEeGNB8JvMEjoXdqJggNpS5M9qs3pmdR2Hekc4-Rvt-fI8xyZhHn2KMxBCiUMNBx1XfziARYcTPCBg3M2CZsRT1A8qsI4pL1yNHEUI3-9uMrmdbD9db3E3Y6shAsifeKMSvfTBPAnHltDHOIMjZyoc7FYRLnG_JllZdBFDUtK9axT1g-HWcGblSD9hn-dvuOoiS26CPSZzbE9Duy50pwq0SFkF37vaN4ZtTEdrwnjA1LBa5-TyoUyE7RKpDE5fZ2dpfYnQaav3pzYfB_4157g-t3ZVECtILWcL7baMewFZcXtFrxBvSiNtSnAAb_rFSIiUS6gni_bnBaHTE4T6OEK5eAzFqhXa3QDujkFD70wB73wPqgHOmd6Z0k0sXeqNzo6ntcYH13L8snY6xWz0"}"#;

/// PEM encoding of [`JWK_4096`]
pub const JWK_4096_PEM: &str = concat!(
    "-----BEGIN PUBLIC KEY-----\n",
    "MIICIjANBgkqhkiG9w0BAQEFAAOCAg8AMIICCgKCAgEAgoToHtkVP3pxYH7s68B2\n",
    "d2uSTBpAm7v/4amWXxVd3UvNVtLHa8CpGRazcAyZedxyYiU9soTvobi3kFA30/Iz\n",
    "BkZdHf5tGOO8EeJOWoCEWIGlZ79oZDMypa8KUZ0woOGdUt2Y7MIn4LJ+QgO1wOuK\n",
    "NvzCjGwUc1TDskAQ0pvAMH8So/NlCMzVWjwFc67upzsZQ1GmRbr+0WfDh+PZI+jz\n",
    "TWBHgedEX3q4JMFy0sJG1cznIXXrhTY6+1Yn3OHtfYI1oKNlZ0J3OKeCnFE/s2D4\n",
    "jOSpyfEeGNB8JvMEjoXdqJggNpS5M9qs3pmdR2Hekc4+Rvt+fI8xyZhHn2KMxBCi\n",
    "UMNBx1XfziARYcTPCBg3M2CZsRT1A8qsI4pL1yNHEUI3+9uMrmdbD9db3E3Y6shA\n",
    "sifeKMSvfTBPAnHltDHOIMjZyoc7FYRLnG/JllZdBFDUtK9axT1g+HWcGblSD9hn\n",
    "+dvuOoiS26CPSZzbE9Duy50pwq0SFkF37vaN4ZtTEdrwnjA1LBa5+TyoUyE7RKpD\n",
    "E5fZ2dpfYnQaav3pzYfB/4157g+t3ZVECtILWcL7baMewFZcXtFrxBvSiNtSnAAb\n",
    "/rFSIiUS6gni/bnBaHTE4T6OEK5eAzFqhXa3QDujkFD70wB73wPqgHOmd6Z0k0sX\n",
    "eqNzo6ntcYH13L8snY6xWz0CAwEAAQ==\n",
    "-----END PUBLIC KEY-----\n",
);

/// Leaf certificate from the RFC 7517 `x5c` example (2048-bit RSA)
pub const RFC7517_X5C: &str = concat!(
    "MIIDQjCCAiqgAwIBAgIGATz/FuLiMA0GCSqGSIb3DQEBBQUAMGIxCzAJBgNVBAYTAlVTMQswCQYDVQQIEwJDTzEPMA0GA1UE",
    "BxMGRGVudmVyMRwwGgYDVQQKExNQaW5nIElkZW50aXR5IENvcnAuMRcwFQYDVQQDEw5CcmlhbiBDYW1wYmVsbDAeFw0xMzAy",
    "MjEyMzI5MTVaFw0xODA4MTQyMjI5MTVaMGIxCzAJBgNVBAYTAlVTMQswCQYDVQQIEwJDTzEPMA0GA1UEBxMGRGVudmVyMRww",
    "GgYDVQQKExNQaW5nIElkZW50aXR5IENvcnAuMRcwFQYDVQQDEw5CcmlhbiBDYW1wYmVsbDCCASIwDQYJKoZIhvcNAQEBBQAD",
    "ggEPADCCAQoCggEBAL64zn8/QnHYMeZ0LncoXaEde1fiLm1jHjmQsF/449IYALM9if6amFtPDy2yvz3YlRij66s5gyLCyO7A",
    "NuVRJx1NbgizcAblIgjtdf/u3WG7K+IiZhtELto/A7Fck9Ws6SQvzRvOE8uSirYbgmj6He4iO8NCyvaK0jIQRMMGQwsU1quG",
    "mFgHIXPLfnpnfajr1rVTAwtgV5LEZ4Iel+W1GC8ugMhyr4/p1MtcIM42EA8BzE6ZQqC7VPqPvEjZ2dbZkaBhPbiZAS3YeYBR",
    "DWm1p1OZtWamT3cEvqqPpnjL1XyW+oyVVkaZdklLQp2Btgt9qr21m42f4wTw+Xrp6rCKNb0CAwEAATANBgkqhkiG9w0BAQUF",
    "AAOCAQEAh8zGlfSlcI0o3rYDPBB07aXNswb4ECNIKG0CETTUxmXl9KUL+9gGlqCz5iWLOgWsnrcKcY0vXPG9J1r9AqBNTqNg",
    "Hq2G03X09266X5CpOe1zFo+Owb1zxtp3PehFdfQJ610CDLEaS9V9Rqp17hCyybEpOGVwe8fnk+fbEL2Bo3UPGrpsHzUoaGpD",
    "ftmWssZkhpBJKVMJyf/RuP2SmmaIzmnw9JiSlYhzo4tpzd5rFXhjRbg4zW9C+2qok+2+qDM1iJ684gPHMIY8aLWrdgQTxkum",
    "GmTqgawR+N5MDtdPTEQ0XfIBc2cJEUyMTY5MPvACWpkA6SdS4xSvdXK3IVfOWA==",
);

/// Modulus of [`RFC7517_X5C`] as a JWK `n` member
pub const RFC7517_N: &str = concat!(
    "vrjOfz9Ccdgx5nQudyhdoR17V-IubWMeOZCwX_jj0hgAsz2J_pqYW08PLbK_PdiVGKPrqzmDIsLI7sA25VEnHU1uCLNwBuUi",
    "CO11_-7dYbsr4iJmG0Qu2j8DsVyT1azpJC_NG84Ty5KKthuCaPod7iI7w0LK9orSMhBEwwZDCxTWq4aYWAchc8t-emd9qOvW",
    "tVMDC2BXksRngh6X5bUYLy6AyHKvj-nUy1wgzjYQDwHMTplCoLtU-o-8SNnZ1tmRoGE9uJkBLdh5gFENabWnU5m1ZqZPdwS-",
    "qo-meMvVfJb6jJVWRpl2SUtCnYG2C32qvbWbjZ_jBPD5eunqsIo1vQ",
);

/// Self-signed P-256 certificate
pub const EC_P256_X5C: &str = concat!(
    "MIIBiDCCAS+gAwIBAgIUXj3PGMMN9AI947u7bMseabzQsHYwCgYIKoZIzj0EAwIwGjEYMBYGA1UEAwwPZWMuZXhhbXBsZS50",
    "ZXN0MB4XDTI2MTAxODAyMjA0M1oXDTM2MTAxNTAyMjA0M1owGjEYMBYGA1UEAwwPZWMuZXhhbXBsZS50ZXN0MFkwEwYHKoZI",
    "zj0CAQYIKoZIzj0DAQcDQgAEQmEdlLY7A7P/jw5k/wNA0sE/hr3kNPgQbHFqpEeTJtnfeHOBMcc2AzBtkKQidliplE7hsim6",
    "Dy3flMw5W9BRuaNTMFEwHQYDVR0OBBYEFAi4S74wGgdrCjU7cTwZ6g5gGZX/MB8GA1UdIwQYMBaAFAi4S74wGgdrCjU7cTwZ",
    "6g5gGZX/MA8GA1UdEwEB/wQFMAMBAf8wCgYIKoZIzj0EAwIDRwAwRAIgGaGA1OpmGrkN7U1u/NM2dkoMJLl3somFfdb93HCj",
    "D0sCIDEBt+iGCqBMnh0/Fu260bTvrWzJKL7wExlSXj1KLAr1",
);

/// RFC 7517 section 4.7 key: RSA `kty` with only an `x5c` chain
pub fn rfc7517_jwk() -> String {
    format!(
        r#"{{"kty":"RSA","use":"sig","kid":"1b94c","x5c":["{RFC7517_X5C}"]}}"#
    )
}
