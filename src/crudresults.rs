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

//! Typed per-operation views over a [`ResultDocument`]. Converting a failure
//! document yields its error verbatim; a success document that does not fit
//! the view's shape yields a protocol-classified error. None of the
//! conversions panic.

use byteorder::{BigEndian, ByteOrder};
use bytes::Bytes;

use crate::document::ResultDocument;
use crate::error::{ErrorKind, OperationError};
use crate::mutationtoken::MutationToken;
use crate::status::Status;
use crate::transcoding;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GetResult {
    pub value: Bytes,
    pub flags: u32,
    pub cas: u64,
}

impl GetResult {
    pub fn content_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, OperationError> {
        transcoding::json::decode(&self.value, self.flags)
    }

    pub fn content_as_raw(&self) -> (&[u8], u32) {
        (&self.value, self.flags)
    }
}

impl TryFrom<ResultDocument> for GetResult {
    type Error = OperationError;

    fn try_from(doc: ResultDocument) -> Result<Self, OperationError> {
        let content = doc.into_result()?;
        let value = content
            .value
            .ok_or_else(|| OperationError::from(Status::ProtocolError))?;

        Ok(GetResult {
            value,
            flags: content.flags,
            cas: content.cas,
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ExistsResult {
    pub exists: bool,
    pub cas: u64,
}

impl TryFrom<ResultDocument> for ExistsResult {
    type Error = OperationError;

    fn try_from(doc: ResultDocument) -> Result<Self, OperationError> {
        match doc.into_result() {
            Ok(content) => Ok(ExistsResult {
                exists: true,
                cas: content.cas,
            }),
            // A missing document is an answer here, not a failure.
            Err(error) if error.is_kind(ErrorKind::DocumentNotFound) => Ok(ExistsResult {
                exists: false,
                cas: 0,
            }),
            Err(error) => Err(error),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TouchResult {
    pub cas: u64,
}

impl TryFrom<ResultDocument> for TouchResult {
    type Error = OperationError;

    fn try_from(doc: ResultDocument) -> Result<Self, OperationError> {
        let content = doc.into_result()?;

        Ok(TouchResult { cas: content.cas })
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MutationResult {
    pub cas: u64,
    pub mutation_token: Option<MutationToken>,
}

impl TryFrom<ResultDocument> for MutationResult {
    type Error = OperationError;

    fn try_from(doc: ResultDocument) -> Result<Self, OperationError> {
        let content = doc.into_result()?;

        Ok(MutationResult {
            cas: content.cas,
            mutation_token: content.mutation_token,
        })
    }
}

/// Counter operations return the post-operation count as an 8 byte big
/// endian payload.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CounterResult {
    pub cas: u64,
    pub value: u64,
    pub mutation_token: Option<MutationToken>,
}

impl TryFrom<ResultDocument> for CounterResult {
    type Error = OperationError;

    fn try_from(doc: ResultDocument) -> Result<Self, OperationError> {
        let content = doc.into_result()?;
        let value = match content.value {
            Some(value) if value.len() == 8 => BigEndian::read_u64(&value),
            _ => return Err(OperationError::from(Status::ProtocolError)),
        };

        Ok(CounterResult {
            cas: content.cas,
            value,
            mutation_token: content.mutation_token,
        })
    }
}
