/*
 *
 *  * Copyright (c) 2025 Couchbase, Inc.
 *  *
 *  * Licensed under the Apache License, Version 2.0 (the "License");
 *  * you may not use this file except in compliance with the License.
 *  * You may obtain a copy of the License at
 *  *
 *  *    http://www.apache.org/licenses/LICENSE-2.0
 *  *
 *  * Unless required by applicable law or agreed to in writing, software
 *  * distributed under the License is distributed on an "AS IS" BASIS,
 *  * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  * See the License for the specific language governing permissions and
 *  * limitations under the License.
 *
 */

use std::fmt::{Display, Formatter};

/// The flat status-code space shared by the wire protocol layer and the
/// client-side detection layer. Codes outside the assigned ranges decode to
/// [`Status::Unknown`], which retains the raw number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Status {
    Success,
    AuthContinue,
    AuthError,
    DeltaBadval,
    TooBig,
    ServerBusy,
    Internal,
    InvalidArgs,
    NoMemory,
    RangeError,
    Generic,
    TmpFail,
    KeyExists,
    KeyNotFound,
    NetworkError,
    NotMyVbucket,
    NotStored,
    NotSupported,
    UnknownCommand,
    UnknownHost,
    ProtocolError,
    TimedOut,
    ConnectError,
    BucketNotFound,
    ClientNoMemory,
    ClientNoConfig,
    BadHandle,
    ServerBug,
    InvalidHostFormat,
    InvalidChar,
    DurabilityTooMany,
    DuplicateCommands,
    NoMatchingServer,
    BadEnvironment,
    ClientBusy,
    InvalidUsername,
    SaslMechUnavailable,
    TooManyRedirects,
    MapChanged,
    IncompletePacket,
    ConnectionRefused,
    SocketShutdown,
    ConnectionReset,
    PortAllocationFailed,
    FdLimitReached,
    NetworkUnreachable,
    EmptyKey,
    TlsError,
    TlsCannotVerify,
    ScheduleFailure,
    FeatureUnavailable,
    OptionsConflict,
    NoMutationTokens,
    UnknownStatusCode,
    MutationLost,
    SubdocPathNotFound,
    SubdocPathMismatch,
    SubdocPathInvalid,
    SubdocPathTooBig,
    SubdocDocTooDeep,
    SubdocCannotInsert,
    SubdocDocNotJson,
    SubdocNumRange,
    SubdocBadDelta,
    SubdocPathExists,
    SubdocMultiFailure,
    SubdocValueTooDeep,
    InvalidPacket,
    SubdocEmptyPath,
    SubdocUnknownCommand,
    NoCommands,
    GenericTmpFail,
    GenericSubdocError,
    GenericConstraintError,
    CasMismatch,
    SyncWriteInProgress,
    SyncWriteAmbiguous,
    DurabilityInvalid,
    EncodingError,

    Unknown(u32),
}

impl From<Status> for u32 {
    fn from(value: Status) -> Self {
        match value {
            Status::Success => 0x00,
            Status::AuthContinue => 0x01,
            Status::AuthError => 0x02,
            Status::DeltaBadval => 0x03,
            Status::TooBig => 0x04,
            Status::ServerBusy => 0x05,
            Status::Internal => 0x06,
            Status::InvalidArgs => 0x07,
            Status::NoMemory => 0x08,
            Status::RangeError => 0x09,
            Status::Generic => 0x0a,
            Status::TmpFail => 0x0b,
            Status::KeyExists => 0x0c,
            Status::KeyNotFound => 0x0d,
            Status::NetworkError => 0x10,
            Status::NotMyVbucket => 0x11,
            Status::NotStored => 0x12,
            Status::NotSupported => 0x13,
            Status::UnknownCommand => 0x14,
            Status::UnknownHost => 0x15,
            Status::ProtocolError => 0x16,
            Status::TimedOut => 0x17,
            Status::ConnectError => 0x18,
            Status::BucketNotFound => 0x19,
            Status::ClientNoMemory => 0x1a,
            Status::ClientNoConfig => 0x1b,
            Status::BadHandle => 0x1c,
            Status::ServerBug => 0x1d,
            Status::InvalidHostFormat => 0x1f,
            Status::InvalidChar => 0x20,
            Status::DurabilityTooMany => 0x21,
            Status::DuplicateCommands => 0x22,
            Status::NoMatchingServer => 0x23,
            Status::BadEnvironment => 0x24,
            Status::ClientBusy => 0x25,
            Status::InvalidUsername => 0x26,
            Status::SaslMechUnavailable => 0x28,
            Status::TooManyRedirects => 0x29,
            Status::MapChanged => 0x2a,
            Status::IncompletePacket => 0x2b,
            Status::ConnectionRefused => 0x2c,
            Status::SocketShutdown => 0x2d,
            Status::ConnectionReset => 0x2e,
            Status::PortAllocationFailed => 0x2f,
            Status::FdLimitReached => 0x30,
            Status::NetworkUnreachable => 0x31,
            Status::EmptyKey => 0x35,
            Status::TlsError => 0x36,
            Status::TlsCannotVerify => 0x37,
            Status::ScheduleFailure => 0x38,
            Status::FeatureUnavailable => 0x39,
            Status::OptionsConflict => 0x3a,
            Status::NoMutationTokens => 0x3c,
            Status::UnknownStatusCode => 0x3d,
            Status::MutationLost => 0x3e,
            Status::SubdocPathNotFound => 0x3f,
            Status::SubdocPathMismatch => 0x40,
            Status::SubdocPathInvalid => 0x41,
            Status::SubdocPathTooBig => 0x42,
            Status::SubdocDocTooDeep => 0x43,
            Status::SubdocCannotInsert => 0x44,
            Status::SubdocDocNotJson => 0x45,
            Status::SubdocNumRange => 0x46,
            Status::SubdocBadDelta => 0x47,
            Status::SubdocPathExists => 0x48,
            Status::SubdocMultiFailure => 0x49,
            Status::SubdocValueTooDeep => 0x4a,
            Status::InvalidPacket => 0x4b,
            Status::SubdocEmptyPath => 0x4c,
            Status::SubdocUnknownCommand => 0x4d,
            Status::NoCommands => 0x4e,
            Status::GenericTmpFail => 0x50,
            Status::GenericSubdocError => 0x51,
            Status::GenericConstraintError => 0x52,
            Status::CasMismatch => 0x53,
            Status::SyncWriteInProgress => 0x54,
            Status::SyncWriteAmbiguous => 0x55,
            Status::DurabilityInvalid => 0x56,
            Status::EncodingError => 0x57,

            Status::Unknown(value) => value,
        }
    }
}

impl From<u32> for Status {
    fn from(value: u32) -> Self {
        match value {
            0x00 => Status::Success,
            0x01 => Status::AuthContinue,
            0x02 => Status::AuthError,
            0x03 => Status::DeltaBadval,
            0x04 => Status::TooBig,
            0x05 => Status::ServerBusy,
            0x06 => Status::Internal,
            0x07 => Status::InvalidArgs,
            0x08 => Status::NoMemory,
            0x09 => Status::RangeError,
            0x0a => Status::Generic,
            0x0b => Status::TmpFail,
            0x0c => Status::KeyExists,
            0x0d => Status::KeyNotFound,
            0x10 => Status::NetworkError,
            0x11 => Status::NotMyVbucket,
            0x12 => Status::NotStored,
            0x13 => Status::NotSupported,
            0x14 => Status::UnknownCommand,
            0x15 => Status::UnknownHost,
            0x16 => Status::ProtocolError,
            0x17 => Status::TimedOut,
            0x18 => Status::ConnectError,
            0x19 => Status::BucketNotFound,
            0x1a => Status::ClientNoMemory,
            0x1b => Status::ClientNoConfig,
            0x1c => Status::BadHandle,
            0x1d => Status::ServerBug,
            0x1f => Status::InvalidHostFormat,
            0x20 => Status::InvalidChar,
            0x21 => Status::DurabilityTooMany,
            0x22 => Status::DuplicateCommands,
            0x23 => Status::NoMatchingServer,
            0x24 => Status::BadEnvironment,
            0x25 => Status::ClientBusy,
            0x26 => Status::InvalidUsername,
            0x28 => Status::SaslMechUnavailable,
            0x29 => Status::TooManyRedirects,
            0x2a => Status::MapChanged,
            0x2b => Status::IncompletePacket,
            0x2c => Status::ConnectionRefused,
            0x2d => Status::SocketShutdown,
            0x2e => Status::ConnectionReset,
            0x2f => Status::PortAllocationFailed,
            0x30 => Status::FdLimitReached,
            0x31 => Status::NetworkUnreachable,
            0x35 => Status::EmptyKey,
            0x36 => Status::TlsError,
            0x37 => Status::TlsCannotVerify,
            0x38 => Status::ScheduleFailure,
            0x39 => Status::FeatureUnavailable,
            0x3a => Status::OptionsConflict,
            0x3c => Status::NoMutationTokens,
            0x3d => Status::UnknownStatusCode,
            0x3e => Status::MutationLost,
            0x3f => Status::SubdocPathNotFound,
            0x40 => Status::SubdocPathMismatch,
            0x41 => Status::SubdocPathInvalid,
            0x42 => Status::SubdocPathTooBig,
            0x43 => Status::SubdocDocTooDeep,
            0x44 => Status::SubdocCannotInsert,
            0x45 => Status::SubdocDocNotJson,
            0x46 => Status::SubdocNumRange,
            0x47 => Status::SubdocBadDelta,
            0x48 => Status::SubdocPathExists,
            0x49 => Status::SubdocMultiFailure,
            0x4a => Status::SubdocValueTooDeep,
            0x4b => Status::InvalidPacket,
            0x4c => Status::SubdocEmptyPath,
            0x4d => Status::SubdocUnknownCommand,
            0x4e => Status::NoCommands,
            0x50 => Status::GenericTmpFail,
            0x51 => Status::GenericSubdocError,
            0x52 => Status::GenericConstraintError,
            0x53 => Status::CasMismatch,
            0x54 => Status::SyncWriteInProgress,
            0x55 => Status::SyncWriteAmbiguous,
            0x56 => Status::DurabilityInvalid,
            0x57 => Status::EncodingError,

            _ => Status::Unknown(value),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let txt = match self {
            Status::Success => "success",
            Status::AuthContinue => "authentication continue",
            Status::AuthError => "authentication error",
            Status::DeltaBadval => "delta on non-numeric value",
            Status::TooBig => "value too big",
            Status::ServerBusy => "server busy",
            Status::Internal => "internal error",
            Status::InvalidArgs => "invalid args",
            Status::NoMemory => "server out of memory",
            Status::RangeError => "invalid range",
            Status::Generic => "generic error",
            Status::TmpFail => "temporary failure",
            Status::KeyExists => "key exists",
            Status::KeyNotFound => "key not found",
            Status::NetworkError => "network failure",
            Status::NotMyVbucket => "not my vbucket",
            Status::NotStored => "not stored",
            Status::NotSupported => "not supported",
            Status::UnknownCommand => "unknown command",
            Status::UnknownHost => "unknown host",
            Status::ProtocolError => "protocol error",
            Status::TimedOut => "timed out",
            Status::ConnectError => "connect error",
            Status::BucketNotFound => "bucket not found",
            Status::ClientNoMemory => "client out of memory",
            Status::ClientNoConfig => "client not bootstrapped",
            Status::BadHandle => "bad handle",
            Status::ServerBug => "server bug",
            Status::InvalidHostFormat => "invalid host format",
            Status::InvalidChar => "invalid character",
            Status::DurabilityTooMany => "durability requirement too high",
            Status::DuplicateCommands => "duplicate commands",
            Status::NoMatchingServer => "no matching server",
            Status::BadEnvironment => "bad environment",
            Status::ClientBusy => "client busy",
            Status::InvalidUsername => "invalid username",
            Status::SaslMechUnavailable => "sasl mechanism unavailable",
            Status::TooManyRedirects => "too many redirects",
            Status::MapChanged => "cluster map changed",
            Status::IncompletePacket => "incomplete packet",
            Status::ConnectionRefused => "connection refused",
            Status::SocketShutdown => "socket shutdown",
            Status::ConnectionReset => "connection reset",
            Status::PortAllocationFailed => "port allocation failed",
            Status::FdLimitReached => "file descriptor limit reached",
            Status::NetworkUnreachable => "network unreachable",
            Status::EmptyKey => "empty key",
            Status::TlsError => "tls error",
            Status::TlsCannotVerify => "tls certificate not verifiable",
            Status::ScheduleFailure => "internal scheduling failure",
            Status::FeatureUnavailable => "client feature unavailable",
            Status::OptionsConflict => "options conflict",
            Status::NoMutationTokens => "no mutation tokens",
            Status::UnknownStatusCode => "unrecognized server status",
            Status::MutationLost => "mutation lost",
            Status::SubdocPathNotFound => "subdoc path not found",
            Status::SubdocPathMismatch => "subdoc path mismatch",
            Status::SubdocPathInvalid => "subdoc path invalid",
            Status::SubdocPathTooBig => "subdoc path too big",
            Status::SubdocDocTooDeep => "subdoc document too deep",
            Status::SubdocCannotInsert => "subdoc cannot insert",
            Status::SubdocDocNotJson => "subdoc document not json",
            Status::SubdocNumRange => "subdoc number out of range",
            Status::SubdocBadDelta => "subdoc bad delta",
            Status::SubdocPathExists => "subdoc path exists",
            Status::SubdocMultiFailure => "subdoc multi failure",
            Status::SubdocValueTooDeep => "subdoc value too deep",
            Status::InvalidPacket => "invalid packet",
            Status::SubdocEmptyPath => "subdoc empty path",
            Status::SubdocUnknownCommand => "subdoc unknown command",
            Status::NoCommands => "no commands specified",
            Status::GenericTmpFail => "generic temporary failure",
            Status::GenericSubdocError => "generic subdoc failure",
            Status::GenericConstraintError => "generic constraint failure",
            Status::CasMismatch => "cas mismatch",
            Status::SyncWriteInProgress => "sync write in progress",
            Status::SyncWriteAmbiguous => "sync write ambiguous",
            Status::DurabilityInvalid => "durability level invalid",
            Status::EncodingError => "value encoding failure",
            Status::Unknown(status) => {
                return write!(f, "unknown status 0x{:02x}", status);
            }
        };

        write!(f, "{}", txt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_raw_code() {
        for raw in 0u32..=0x57 {
            let status = Status::from(raw);
            if let Status::Unknown(kept) = status {
                assert_eq!(kept, raw);
            } else {
                assert_eq!(u32::from(status), raw);
            }
        }
    }

    #[test]
    fn unassigned_code_is_kept_verbatim() {
        let status = Status::from(999999);
        assert_eq!(status, Status::Unknown(999999));
        assert_eq!(u32::from(status), 999999);
    }
}
