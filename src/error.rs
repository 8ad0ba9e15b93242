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

use log::warn;

use crate::status::Status;

/// Structured error attached to a failed result document.
///
/// Carries the semantic [`ErrorKind`] the raw status classified to and the
/// verbatim raw code for diagnostics. Built once per failed operation and
/// never mutated afterwards.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, Hash)]
#[error("{kind} (status 0x{raw_code:02x})")]
pub struct OperationError {
    kind: ErrorKind,
    raw_code: u32,
}

impl OperationError {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn raw_code(&self) -> u32 {
        self.raw_code
    }

    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    pub fn is_kind(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl From<Status> for OperationError {
    fn from(status: Status) -> Self {
        Self {
            kind: ErrorKind::from(status),
            raw_code: u32::from(status),
        }
    }
}

impl From<u32> for OperationError {
    fn from(raw_code: u32) -> Self {
        let status = Status::from(raw_code);
        if let Status::Unknown(code) = status {
            warn!("classifying unrecognized status code 0x{:02x}", code);
        }

        Self::from(status)
    }
}

/// Semantic failure kinds, each grouping one or more raw statuses.
///
/// Stable and equality-comparable so calling code can branch on error kind
/// without string matching.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    ConnectionClosed,
    ConnectFailed,
    NetworkFailure,
    DnsFailure,
    Timeout,
    Busy,

    InvalidArgument,
    ValueTooLarge,
    DuplicateCommands,
    OptionsConflict,
    ProtocolError,
    TlsFailure,
    FeatureUnavailable,
    EncodingFailure,
    ClientError,

    DocumentNotFound,
    DocumentExists,
    CasConflict,
    DocumentNotStored,
    DeltaInvalid,
    TemporaryFailure,
    MutationLost,

    ServerOutOfMemory,
    InternalError,
    NotSupported,
    AuthenticationFailure,
    BucketNotFound,
    TopologyChanged,
    DurabilityImpossible,
    DurabilityAmbiguous,
    DurabilityInProgress,
    DurabilityInvalid,
    ConstraintFailure,

    PathNotFound,
    PathMismatch,
    PathInvalid,
    PathTooDeep,
    DocumentTooDeep,
    DocumentNotJson,
    ValueTooDeep,
    ValueInvalid,
    DeltaRange,
    PathExists,
    SubdocFailure,

    GenericFailure,
    Unknown,
}

impl ErrorKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            ErrorKind::ConnectionClosed
            | ErrorKind::ConnectFailed
            | ErrorKind::NetworkFailure
            | ErrorKind::DnsFailure
            | ErrorKind::Timeout
            | ErrorKind::Busy => ErrorClass::Network,

            ErrorKind::InvalidArgument
            | ErrorKind::ValueTooLarge
            | ErrorKind::DuplicateCommands
            | ErrorKind::OptionsConflict
            | ErrorKind::ProtocolError
            | ErrorKind::TlsFailure
            | ErrorKind::FeatureUnavailable
            | ErrorKind::EncodingFailure
            | ErrorKind::ClientError => ErrorClass::Client,

            ErrorKind::DocumentNotFound
            | ErrorKind::DocumentExists
            | ErrorKind::CasConflict
            | ErrorKind::DocumentNotStored
            | ErrorKind::DeltaInvalid
            | ErrorKind::TemporaryFailure
            | ErrorKind::MutationLost => ErrorClass::DocumentState,

            ErrorKind::ServerOutOfMemory
            | ErrorKind::InternalError
            | ErrorKind::NotSupported
            | ErrorKind::AuthenticationFailure
            | ErrorKind::BucketNotFound
            | ErrorKind::TopologyChanged
            | ErrorKind::DurabilityImpossible
            | ErrorKind::DurabilityAmbiguous
            | ErrorKind::DurabilityInProgress
            | ErrorKind::DurabilityInvalid
            | ErrorKind::ConstraintFailure => ErrorClass::Server,

            ErrorKind::PathNotFound
            | ErrorKind::PathMismatch
            | ErrorKind::PathInvalid
            | ErrorKind::PathTooDeep
            | ErrorKind::DocumentTooDeep
            | ErrorKind::DocumentNotJson
            | ErrorKind::ValueTooDeep
            | ErrorKind::ValueInvalid
            | ErrorKind::DeltaRange
            | ErrorKind::PathExists
            | ErrorKind::SubdocFailure => ErrorClass::Subdoc,

            ErrorKind::GenericFailure | ErrorKind::Unknown => ErrorClass::Unknown,
        }
    }
}

impl From<Status> for ErrorKind {
    fn from(status: Status) -> Self {
        match status {
            Status::SocketShutdown | Status::ConnectionReset => ErrorKind::ConnectionClosed,
            Status::ConnectError
            | Status::ConnectionRefused
            | Status::PortAllocationFailed
            | Status::FdLimitReached => ErrorKind::ConnectFailed,
            Status::NetworkError | Status::NetworkUnreachable | Status::TooManyRedirects => {
                ErrorKind::NetworkFailure
            }
            Status::UnknownHost | Status::InvalidHostFormat => ErrorKind::DnsFailure,
            Status::TimedOut => ErrorKind::Timeout,
            Status::ServerBusy | Status::ClientBusy => ErrorKind::Busy,

            Status::InvalidArgs
            | Status::InvalidChar
            | Status::EmptyKey
            | Status::RangeError
            | Status::NoCommands => ErrorKind::InvalidArgument,
            Status::TooBig => ErrorKind::ValueTooLarge,
            Status::DuplicateCommands => ErrorKind::DuplicateCommands,
            Status::OptionsConflict => ErrorKind::OptionsConflict,
            Status::ProtocolError | Status::InvalidPacket | Status::UnknownStatusCode => {
                ErrorKind::ProtocolError
            }
            Status::TlsError | Status::TlsCannotVerify => ErrorKind::TlsFailure,
            Status::FeatureUnavailable => ErrorKind::FeatureUnavailable,
            Status::EncodingError => ErrorKind::EncodingFailure,
            Status::ClientNoMemory
            | Status::ClientNoConfig
            | Status::BadHandle
            | Status::ScheduleFailure
            | Status::IncompletePacket
            | Status::BadEnvironment => ErrorKind::ClientError,

            Status::KeyNotFound => ErrorKind::DocumentNotFound,
            Status::KeyExists => ErrorKind::DocumentExists,
            Status::CasMismatch => ErrorKind::CasConflict,
            Status::NotStored => ErrorKind::DocumentNotStored,
            Status::DeltaBadval => ErrorKind::DeltaInvalid,
            Status::TmpFail | Status::GenericTmpFail => ErrorKind::TemporaryFailure,
            Status::MutationLost => ErrorKind::MutationLost,

            Status::NoMemory => ErrorKind::ServerOutOfMemory,
            Status::Internal | Status::ServerBug => ErrorKind::InternalError,
            Status::NotSupported | Status::UnknownCommand => ErrorKind::NotSupported,
            Status::AuthError | Status::InvalidUsername | Status::SaslMechUnavailable => {
                ErrorKind::AuthenticationFailure
            }
            Status::BucketNotFound => ErrorKind::BucketNotFound,
            Status::NotMyVbucket | Status::MapChanged | Status::NoMatchingServer => {
                ErrorKind::TopologyChanged
            }
            Status::DurabilityTooMany => ErrorKind::DurabilityImpossible,
            Status::SyncWriteAmbiguous => ErrorKind::DurabilityAmbiguous,
            Status::SyncWriteInProgress => ErrorKind::DurabilityInProgress,
            Status::DurabilityInvalid | Status::NoMutationTokens => ErrorKind::DurabilityInvalid,
            Status::GenericConstraintError => ErrorKind::ConstraintFailure,

            Status::SubdocPathNotFound => ErrorKind::PathNotFound,
            Status::SubdocPathMismatch => ErrorKind::PathMismatch,
            Status::SubdocPathInvalid | Status::SubdocEmptyPath => ErrorKind::PathInvalid,
            Status::SubdocPathTooBig => ErrorKind::PathTooDeep,
            Status::SubdocDocTooDeep => ErrorKind::DocumentTooDeep,
            Status::SubdocDocNotJson => ErrorKind::DocumentNotJson,
            Status::SubdocValueTooDeep => ErrorKind::ValueTooDeep,
            Status::SubdocCannotInsert => ErrorKind::ValueInvalid,
            Status::SubdocNumRange | Status::SubdocBadDelta => ErrorKind::DeltaRange,
            Status::SubdocPathExists => ErrorKind::PathExists,
            Status::SubdocMultiFailure
            | Status::SubdocUnknownCommand
            | Status::GenericSubdocError => ErrorKind::SubdocFailure,

            Status::Generic => ErrorKind::GenericFailure,

            // Not failure codes. A transport handing these to the failure
            // path gets the catch-all.
            Status::Success | Status::AuthContinue => ErrorKind::Unknown,

            Status::Unknown(_) => ErrorKind::Unknown,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let txt = match self {
            ErrorKind::ConnectionClosed => "connection closed",
            ErrorKind::ConnectFailed => "connect failed",
            ErrorKind::NetworkFailure => "network failure",
            ErrorKind::DnsFailure => "dns failure",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Busy => "busy",
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::ValueTooLarge => "value too large",
            ErrorKind::DuplicateCommands => "duplicate commands",
            ErrorKind::OptionsConflict => "options conflict",
            ErrorKind::ProtocolError => "protocol error",
            ErrorKind::TlsFailure => "tls failure",
            ErrorKind::FeatureUnavailable => "feature unavailable",
            ErrorKind::EncodingFailure => "value encoding failure",
            ErrorKind::ClientError => "client error",
            ErrorKind::DocumentNotFound => "document not found",
            ErrorKind::DocumentExists => "document exists",
            ErrorKind::CasConflict => "cas conflict",
            ErrorKind::DocumentNotStored => "document not stored",
            ErrorKind::DeltaInvalid => "delta invalid",
            ErrorKind::TemporaryFailure => "temporary failure",
            ErrorKind::MutationLost => "mutation lost",
            ErrorKind::ServerOutOfMemory => "server out of memory",
            ErrorKind::InternalError => "internal error",
            ErrorKind::NotSupported => "not supported",
            ErrorKind::AuthenticationFailure => "authentication failure",
            ErrorKind::BucketNotFound => "bucket not found",
            ErrorKind::TopologyChanged => "topology changed",
            ErrorKind::DurabilityImpossible => "durability impossible",
            ErrorKind::DurabilityAmbiguous => "durability ambiguous",
            ErrorKind::DurabilityInProgress => "durable write in progress",
            ErrorKind::DurabilityInvalid => "durability invalid",
            ErrorKind::ConstraintFailure => "constraint failure",
            ErrorKind::PathNotFound => "subdoc path not found",
            ErrorKind::PathMismatch => "subdoc path mismatch",
            ErrorKind::PathInvalid => "subdoc path invalid",
            ErrorKind::PathTooDeep => "subdoc path too deep",
            ErrorKind::DocumentTooDeep => "subdoc document too deep",
            ErrorKind::DocumentNotJson => "subdoc document not json",
            ErrorKind::ValueTooDeep => "subdoc value too deep",
            ErrorKind::ValueInvalid => "subdoc value invalid",
            ErrorKind::DeltaRange => "subdoc delta out of range",
            ErrorKind::PathExists => "subdoc path exists",
            ErrorKind::SubdocFailure => "subdoc failure",
            ErrorKind::GenericFailure => "generic failure",
            ErrorKind::Unknown => "unknown error",
        };

        write!(f, "{}", txt)
    }
}

/// Coarse grouping of [`ErrorKind`], for callers that only care which layer
/// a failure came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorClass {
    Network,
    Client,
    DocumentState,
    Server,
    Subdoc,
    Unknown,
}

impl Display for ErrorClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let txt = match self {
            ErrorClass::Network => "network",
            ErrorClass::Client => "client",
            ErrorClass::DocumentState => "document state",
            ErrorClass::Server => "server",
            ErrorClass::Subdoc => "subdoc",
            ErrorClass::Unknown => "unknown",
        };

        write!(f, "{}", txt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assigned_failure_codes() -> Vec<u32> {
        (0x02u32..=0x57)
            .filter(|raw| !matches!(Status::from(*raw), Status::Unknown(_)))
            .collect()
    }

    #[test]
    fn every_assigned_failure_code_classifies() {
        for raw in assigned_failure_codes() {
            let err = OperationError::from(raw);
            assert_ne!(
                err.kind(),
                ErrorKind::Unknown,
                "status 0x{:02x} fell through to the catch-all",
                raw
            );
            assert_eq!(err.raw_code(), raw);
        }
    }

    #[test]
    fn classification_is_deterministic() {
        for raw in assigned_failure_codes() {
            assert_eq!(
                OperationError::from(raw),
                OperationError::from(raw),
                "status 0x{:02x} classified differently across invocations",
                raw
            );
        }
    }

    #[test]
    fn unassigned_code_maps_to_unknown() {
        let err = OperationError::from(999999);
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(err.raw_code(), 999999);
        assert_eq!(err.class(), ErrorClass::Unknown);
    }

    #[test]
    fn kinds_group_into_expected_classes() {
        let cases = [
            (Status::ConnectionReset, ErrorClass::Network),
            (Status::TimedOut, ErrorClass::Network),
            (Status::UnknownHost, ErrorClass::Network),
            (Status::InvalidArgs, ErrorClass::Client),
            (Status::TooBig, ErrorClass::Client),
            (Status::OptionsConflict, ErrorClass::Client),
            (Status::KeyNotFound, ErrorClass::DocumentState),
            (Status::CasMismatch, ErrorClass::DocumentState),
            (Status::NotStored, ErrorClass::DocumentState),
            (Status::NoMemory, ErrorClass::Server),
            (Status::AuthError, ErrorClass::Server),
            (Status::SyncWriteAmbiguous, ErrorClass::Server),
            (Status::SubdocPathNotFound, ErrorClass::Subdoc),
            (Status::SubdocDocNotJson, ErrorClass::Subdoc),
            (Status::Generic, ErrorClass::Unknown),
        ];

        for (status, class) in cases {
            let err = OperationError::from(status);
            assert_eq!(err.class(), class, "wrong class for {}", status);
        }
    }

    #[test]
    fn error_display_includes_kind_and_raw_code() {
        let err = OperationError::from(Status::KeyNotFound);
        assert_eq!(err.to_string(), "document not found (status 0x0d)");
    }
}
