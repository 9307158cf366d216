extern crate winpathclass;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use winpathclass::classify::{find_unc_server_and_share, UncError, UncParts};

#[test]
fn test_complete() {
    assert_eq!(
        find_unc_server_and_share(b"server\\share\\dir"),
        Ok(UncParts { server: 0, share: 7, directory: 13 }),
    );

    // Nothing after the share separator is still complete.
    let parts = find_unc_server_and_share(b"server\\share\\").expect(here!());
    assert_eq!(parts.directory, 13);

    // Either separator ends the share.
    assert_eq!(
        find_unc_server_and_share(b"srv\\sh/d"),
        Ok(UncParts { server: 0, share: 4, directory: 7 }),
    );
}

#[test]
fn test_empty_share() {
    // A second separator straight after the server fills the share slot
    // with nothing; the directory begins after it.
    assert_eq!(
        find_unc_server_and_share(b"srv\\\\x\\"),
        Ok(UncParts { server: 0, share: 4, directory: 5 }),
    );
    assert_eq!(
        find_unc_server_and_share(b"srv\\/x"),
        Ok(UncParts { server: 0, share: 4, directory: 5 }),
    );
}

#[test]
fn test_forward_slash_in_server() {
    // Only `\` ends the server name.
    assert_eq!(
        find_unc_server_and_share(b"srv/x\\sh\\d"),
        Ok(UncParts { server: 0, share: 6, directory: 9 }),
    );
}

#[test]
fn test_incomplete() {
    assert_eq!(find_unc_server_and_share(b"server\\share"), Err(UncError::Unterminated { share: 7 }));
    assert_eq!(find_unc_server_and_share(b"server\\"), Err(UncError::Unterminated { share: 7 }));
    assert_eq!(find_unc_server_and_share(b"server"), Err(UncError::MissingShare));
    assert_eq!(find_unc_server_and_share(b"server/share/"), Err(UncError::MissingShare));
}

#[test]
fn test_malformed() {
    assert_eq!(find_unc_server_and_share::<u8>(b""), Err(UncError::EmptyServer));
    assert_eq!(find_unc_server_and_share(b"\\x\\y\\"), Err(UncError::EmptyServer));
    assert_eq!(find_unc_server_and_share(b"C:\\x\\y"), Err(UncError::Colon { at: 1 }));
    assert_eq!(find_unc_server_and_share(b"srv\\sh:\\y"), Err(UncError::Colon { at: 6 }));
}

#[test]
fn test_error_display() {
    assert_eq!(UncError::Colon { at: 3 }.to_string(), "colon at offset 3");
    assert_eq!(UncError::Unterminated { share: 7 }.to_string(), "share at offset 7 is not terminated");
}

#[test]
fn test_wide() {
    let path: Vec<u16> = "server\\share\\dir".encode_utf16().collect();
    assert_eq!(
        find_unc_server_and_share(&path),
        Ok(UncParts { server: 0, share: 7, directory: 13 }),
    );

    let path: Vec<u16> = "s\u{e9}rveur\\partage\\".encode_utf16().collect();
    let parts = find_unc_server_and_share(&path).expect(here!());
    assert_eq!(parts.share, 8);
    assert_eq!(parts.directory, path.len());
}
