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

use crate::error::OperationError;
use crate::mutationtoken::MutationToken;

/// Normalized outcome of one key-value operation.
///
/// Every operation result passes through this type: either a success carrying
/// the returned value (if any), the verbatim flags, the cas of the stored
/// document, and the mutation token (if the server returned one), or a
/// failure carrying an [`OperationError`]. The two cannot mix; a document is
/// an immutable snapshot of a single completed operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultDocument {
    outcome: Outcome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Outcome {
    Success(DocumentContent),
    Failure(OperationError),
}

/// The success fields of a [`ResultDocument`], extracted via
/// [`ResultDocument::into_result`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentContent {
    pub value: Option<Bytes>,
    pub flags: u32,
    pub cas: u64,
    pub mutation_token: Option<MutationToken>,
}

impl ResultDocument {
    /// Assembles a success document from already-validated raw fields.
    ///
    /// `value` is absent for operations that return no content, `flags` is
    /// copied verbatim, and `mutation_token` is present only when the
    /// operation produced one.
    pub fn new(
        value: impl Into<Option<Bytes>>,
        flags: u32,
        cas: u64,
        mutation_token: impl Into<Option<MutationToken>>,
    ) -> Self {
        Self {
            outcome: Outcome::Success(DocumentContent {
                value: value.into(),
                flags,
                cas,
                mutation_token: mutation_token.into(),
            }),
        }
    }

    /// Builds a failure document carrying only the given error.
    pub fn from_error(error: OperationError) -> Self {
        Self {
            outcome: Outcome::Failure(error),
        }
    }

    /// Builds a failure document by classifying a raw status code.
    pub fn from_status(raw_code: u32) -> Self {
        Self::from_error(OperationError::from(raw_code))
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    pub fn value(&self) -> Option<&Bytes> {
        match &self.outcome {
            Outcome::Success(content) => content.value.as_ref(),
            Outcome::Failure(_) => None,
        }
    }

    pub fn flags(&self) -> Option<u32> {
        match &self.outcome {
            Outcome::Success(content) => Some(content.flags),
            Outcome::Failure(_) => None,
        }
    }

    pub fn cas(&self) -> Option<u64> {
        match &self.outcome {
            Outcome::Success(content) => Some(content.cas),
            Outcome::Failure(_) => None,
        }
    }

    pub fn mutation_token(&self) -> Option<&MutationToken> {
        match &self.outcome {
            Outcome::Success(content) => content.mutation_token.as_ref(),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&OperationError> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Unwraps the document into the success fields or the attached error.
    pub fn into_result(self) -> Result<DocumentContent, OperationError> {
        match self.outcome {
            Outcome::Success(content) => Ok(content),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::status::Status;

    #[test]
    fn success_document_keeps_inputs_verbatim() {
        let token = MutationToken::new(3, 0xabc, 42);
        let doc = ResultDocument::new(Bytes::from_static(b"hello"), 7, 12345, token);

        assert!(doc.is_success());
        assert_eq!(doc.value(), Some(&Bytes::from_static(b"hello")));
        assert_eq!(doc.flags(), Some(7));
        assert_eq!(doc.cas(), Some(12345));
        assert_eq!(doc.mutation_token(), Some(&token));
        assert_eq!(doc.error(), None);
    }

    #[test]
    fn valueless_success_document() {
        let doc = ResultDocument::new(None, 0, 1, None);

        assert!(doc.is_success());
        assert_eq!(doc.value(), None);
        assert_eq!(doc.flags(), Some(0));
        assert_eq!(doc.cas(), Some(1));
        assert_eq!(doc.mutation_token(), None);
    }

    #[test]
    fn failure_document_carries_only_the_error() {
        let doc = ResultDocument::from_status(u32::from(Status::KeyNotFound));

        assert!(!doc.is_success());
        assert_eq!(doc.value(), None);
        assert_eq!(doc.flags(), None);
        assert_eq!(doc.cas(), None);
        assert_eq!(doc.mutation_token(), None);

        let error = doc.error().expect("failure document must carry an error");
        assert_eq!(error.kind(), ErrorKind::DocumentNotFound);
        assert_eq!(error.raw_code(), u32::from(Status::KeyNotFound));
    }

    #[test]
    fn error_present_exactly_when_cas_absent() {
        let docs = [
            ResultDocument::new(None, 0, 9, None),
            ResultDocument::from_status(u32::from(Status::TmpFail)),
            ResultDocument::from_status(424242),
        ];

        for doc in docs {
            assert_eq!(doc.error().is_some(), doc.cas().is_none());
        }
    }

    #[test]
    fn into_result_splits_on_outcome() {
        let ok = ResultDocument::new(Bytes::from_static(b"v"), 2, 3, None)
            .into_result()
            .expect("success document");
        assert_eq!(ok.value, Some(Bytes::from_static(b"v")));
        assert_eq!(ok.flags, 2);
        assert_eq!(ok.cas, 3);

        let err = ResultDocument::from_status(u32::from(Status::CasMismatch))
            .into_result()
            .expect_err("failure document");
        assert_eq!(err.kind(), ErrorKind::CasConflict);
    }
}
