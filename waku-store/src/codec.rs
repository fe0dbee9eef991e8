use std::io;

use async_trait::async_trait;
use asynchronous_codec::{FramedRead, FramedWrite};
use bytes::{Bytes, BytesMut};
use futures::{AsyncRead, AsyncWrite, SinkExt, StreamExt};
use libp2p::request_response;
use unsigned_varint::codec::UviBytes;

use crate::protocol::StoreProtocol;
use crate::rpc::MAX_PROTOBUF_SIZE;

/// Request-response codec of the store protocol.
///
/// Requests and responses are single protobuf messages prefixed by their unsigned varint
/// length. The codec only frames them; encoding is done by the [`rpc`](crate::rpc) module.
#[derive(Debug, Clone, Default)]
pub struct Codec;

fn frame_codec() -> UviBytes<Bytes> {
    let mut codec = UviBytes::default();
    codec.set_max_len(MAX_PROTOBUF_SIZE);
    codec
}

async fn read_frame<T>(io: &mut T) -> io::Result<Bytes>
where
    T: AsyncRead + Unpin + Send,
{
    FramedRead::new(io, frame_codec())
        .next()
        .await
        .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))?
        .map(BytesMut::freeze)
}

async fn write_frame<T>(io: &mut T, frame: Bytes) -> io::Result<()>
where
    T: AsyncWrite + Unpin + Send,
{
    let mut framed_io = FramedWrite::new(io, frame_codec());
    framed_io.send(frame).await?;
    framed_io.close().await
}

#[async_trait]
impl request_response::Codec for Codec {
    type Protocol = StoreProtocol;
    type Request = Bytes;
    type Response = Bytes;

    async fn read_request<T>(&mut self, _: &StoreProtocol, io: &mut T) -> io::Result<Bytes>
    where
        T: AsyncRead + Unpin + Send,
    {
        read_frame(io).await
    }

    async fn read_response<T>(&mut self, _: &StoreProtocol, io: &mut T) -> io::Result<Bytes>
    where
        T: AsyncRead + Unpin + Send,
    {
        read_frame(io).await
    }

    async fn write_request<T>(
        &mut self,
        _: &StoreProtocol,
        io: &mut T,
        request: Bytes,
    ) -> io::Result<()>
    where
        T: AsyncWrite + Unpin + Send,
    {
        write_frame(io, request).await
    }

    async fn write_response<T>(
        &mut self,
        _: &StoreProtocol,
        io: &mut T,
        response: Bytes,
    ) -> io::Result<()>
    where
        T: AsyncWrite + Unpin + Send,
    {
        write_frame(io, response).await
    }
}
