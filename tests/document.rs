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

use bytes::Bytes;
use memdoc::crudresults::{CounterResult, GetResult, MutationResult};
use memdoc::document::ResultDocument;
use memdoc::error::{ErrorClass, ErrorKind, OperationError};
use memdoc::mutationtoken::MutationToken;
use memdoc::status::Status;
use memdoc::transcoding;
use serde::{Deserialize, Serialize};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn get_outcome_surfaces_value_flags_and_cas() {
    init_logging();

    let doc = ResultDocument::new(Bytes::from_static(b"hello"), 0, 12345, None);

    assert_eq!(doc.value(), Some(&Bytes::from_static(b"hello")));
    assert_eq!(doc.flags(), Some(0));
    assert_eq!(doc.cas(), Some(12345));
    assert_eq!(doc.mutation_token(), None);
    assert_eq!(doc.error(), None);
}

#[test]
fn missing_document_surfaces_as_document_not_found() {
    init_logging();

    let doc = ResultDocument::from_status(u32::from(Status::KeyNotFound));

    assert_eq!(doc.value(), None);
    assert_eq!(doc.cas(), None);
    assert_eq!(doc.mutation_token(), None);

    let error = doc.error().expect("failure document carries an error");
    assert_eq!(error.kind(), ErrorKind::DocumentNotFound);
    assert_eq!(error.raw_code(), u32::from(Status::KeyNotFound));
}

#[test]
fn stale_cas_surfaces_as_cas_conflict() {
    init_logging();

    let doc = ResultDocument::from_status(u32::from(Status::CasMismatch));
    let error = doc.error().expect("failure document carries an error");

    assert_eq!(error.kind(), ErrorKind::CasConflict);
    assert_eq!(error.class(), ErrorClass::DocumentState);
}

#[test]
fn unregistered_status_degrades_to_unknown() {
    init_logging();

    let doc = ResultDocument::from_status(999999);
    let error = doc.error().expect("failure document carries an error");

    assert_eq!(error.kind(), ErrorKind::Unknown);
    assert_eq!(error.raw_code(), 999999);
}

#[test]
fn mutation_outcome_carries_the_durability_token() {
    init_logging();

    let token = MutationToken::new(3, 0xabc, 42);
    let doc = ResultDocument::new(None, 7, 1, token);

    assert_eq!(doc.value(), None);
    assert_eq!(doc.flags(), Some(7));
    assert_eq!(doc.mutation_token(), Some(&token));

    let result = MutationResult::try_from(doc).expect("mutation succeeded");
    assert_eq!(result.cas, 1);
    assert_eq!(
        result.mutation_token.map(|t| (t.vbid(), t.seqno(), t.vbuuid())),
        Some((3, 42, 0xabc))
    );
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    age: u32,
}

#[test]
fn typed_content_flows_through_the_document() {
    init_logging();

    let profile = Profile {
        name: "arthur".to_string(),
        age: 42,
    };
    let (content, flags) = transcoding::json::encode(&profile).expect("encode failed");

    let doc = ResultDocument::new(Bytes::from(content), flags, 555, None);
    let result = GetResult::try_from(doc).expect("success document");

    assert_eq!(result.content_as::<Profile>().expect("decode failed"), profile);
}

#[test]
fn counter_flow_decodes_the_count() {
    init_logging();

    let doc = ResultDocument::new(
        Bytes::from_static(&[0, 0, 0, 0, 0, 0, 0, 11]),
        0,
        88,
        MutationToken::new(1, 2, 3),
    );
    let result = CounterResult::try_from(doc).expect("success document");

    assert_eq!(result.value, 11);
    assert_eq!(result.cas, 88);
}

#[test]
fn failure_document_converts_to_err_with_the_original_error() {
    init_logging();

    let raw = u32::from(Status::SyncWriteAmbiguous);
    let doc = ResultDocument::from_status(raw);
    let expected = OperationError::from(raw);

    let err = GetResult::try_from(doc).expect_err("failure document");
    assert_eq!(err, expected);
    assert_eq!(err.kind(), ErrorKind::DurabilityAmbiguous);
}
