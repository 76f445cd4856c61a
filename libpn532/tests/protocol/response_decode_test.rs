#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::codec::decode_response_frame;
use libpn532::protocol::{Command, MifareRequest, Response};

#[test]
fn firmware_version_from_capture() {
    let resp = decode_response_frame(
        &Command::GetFirmwareVersion,
        &common::fixtures::firmware_response_frame(),
    )
    .unwrap();
    match resp {
        Response::FirmwareVersion(v) => {
            assert_eq!(v.ic, 0x32);
            assert_eq!((v.version, v.revision), (1, 6));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn scan_answer_from_capture() {
    let resp = decode_response_frame(
        &Command::scan_single_target(),
        &common::fixtures::scan_response_frame(),
    )
    .unwrap();
    match resp {
        Response::InListPassiveTarget {
            count: 1,
            target: Some(target),
        } => {
            assert_eq!(target.uid, common::fixtures::classic_uid());
            assert_eq!(target.sel_res, 0x08);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn exchange_status_from_capture() {
    let cmd = Command::data_exchange(MifareRequest::Read { block: 4 });
    let resp = decode_response_frame(&cmd, &common::fixtures::exchange_ok_frame()).unwrap();
    assert_eq!(
        resp,
        Response::InDataExchange {
            status: 0,
            data: vec![]
        }
    );
}

#[test]
fn response_to_other_command_is_rejected() {
    assert!(
        decode_response_frame(
            &Command::GetFirmwareVersion,
            &common::fixtures::exchange_ok_frame()
        )
        .is_err()
    );
}
