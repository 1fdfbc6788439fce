//! The fixed `httpRequest.ts` runtime boilerplate.
//!
//! This is the generated-code contract every emitted service function
//! depends on: the verb dispatcher, the path templating helper, the body
//! encoders, the override merge, and the response envelope. The content is
//! fixed text; only the emitters' import lists decide which names a given
//! project actually pulls in.

use std::path::{Path, PathBuf};

use tsugu_codegen::GeneratedFile;

use crate::AUTOGENERATED_HEADER;

/// The `httpRequest.ts` runtime support file.
pub struct HttpRequestFile;

impl GeneratedFile for HttpRequestFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("httpRequest.ts")
    }

    fn render(&self) -> String {
        format!("{}{}", AUTOGENERATED_HEADER, HTTP_REQUEST)
    }
}

const HTTP_REQUEST: &str = r#"
import { baseConfig } from "./config";

export const __DEV__ = process.env.NODE_ENV !== "production";

export interface RequestOverrides {
  baseUrl?: string;
  headers?: Record<string, string>;
  signal?: AbortSignal;
  [key: string]: unknown;
}

export interface ResponseWrapper<T> {
  data: T;
  status: number;
  headers: Headers;
}

export interface RequestHooks<T> {
  onSuccess?: (response: ResponseWrapper<T>) => void;
  onError?: (error: Error) => void;
  onSettled?: () => void;
}

export class RequestError extends Error {
  constructor(
    message: string,
    public status: number,
    public body?: unknown,
  ) {
    super(message);
    this.name = "RequestError";
  }
}

export function template(path: string, params: Record<string, unknown>): string {
  return path.replace(/\{([^}]+)\}/g, (match, key) => {
    const value = params[key];
    return value === undefined ? match : encodeURIComponent(String(value));
  });
}

export function objToForm(obj: Record<string, unknown>): FormData {
  const form = new FormData();
  Object.entries(obj).forEach(([key, value]) => {
    if (value === undefined || value === null) {
      return;
    }
    if (value instanceof Blob) {
      form.append(key, value);
    } else {
      form.append(key, String(value));
    }
  });
  return form;
}

export function objToUrlencoded(obj: Record<string, unknown>): URLSearchParams {
  const params = new URLSearchParams();
  Object.entries(obj).forEach(([key, value]) => {
    if (value !== undefined && value !== null) {
      params.append(key, String(value));
    }
  });
  return params;
}

export function overrideConfig(
  base?: RequestOverrides,
  overrides?: RequestOverrides,
): RequestOverrides {
  return {
    ...base,
    ...overrides,
    headers: { ...base?.headers, ...overrides?.headers },
  };
}

function buildQuery(queryParams?: Record<string, any>): string {
  if (!queryParams) {
    return "";
  }
  const params = new URLSearchParams();
  Object.entries(queryParams).forEach(([key, value]) => {
    if (value !== undefined && value !== null) {
      params.append(key, String(value));
    }
  });
  const text = params.toString();
  return text ? `?${text}` : "";
}

async function request<T>(
  method: string,
  path: string,
  queryParams?: Record<string, any>,
  body?: unknown,
  security?: unknown,
  config?: RequestOverrides,
): Promise<ResponseWrapper<T>> {
  const baseUrl = config?.baseUrl ?? baseConfig.baseUrl;
  const url = baseUrl + path + buildQuery(queryParams);

  const headers: Record<string, string> = {
    ...baseConfig.headers,
    ...config?.headers,
  };

  if (security) {
    const token = baseConfig.getToken?.();
    if (token && headers["Authorization"] === undefined) {
      headers["Authorization"] = `Bearer ${token}`;
    }
  }

  let payload: BodyInit | undefined;
  if (body instanceof FormData || body instanceof URLSearchParams) {
    payload = body;
  } else if (body !== undefined) {
    if (headers["Content-Type"] === undefined) {
      headers["Content-Type"] = "application/json";
    }
    payload = JSON.stringify(body);
  }

  const response = await fetch(url, {
    method: method.toUpperCase(),
    headers,
    body: payload,
    signal: config?.signal,
  });

  const text = await response.text();
  const data = (text ? JSON.parse(text) : undefined) as T;

  if (!response.ok) {
    throw new RequestError(
      `${method.toUpperCase()} ${path} failed with status ${response.status}`,
      response.status,
      data,
    );
  }

  return { data, status: response.status, headers: response.headers };
}

export const Http = {
  getRequest<T>(
    path: string,
    queryParams?: Record<string, any>,
    body?: unknown,
    security?: unknown,
    config?: RequestOverrides,
  ): Promise<ResponseWrapper<T>> {
    return request<T>("get", path, queryParams, body, security, config);
  },
  postRequest<T>(
    path: string,
    queryParams?: Record<string, any>,
    body?: unknown,
    security?: unknown,
    config?: RequestOverrides,
  ): Promise<ResponseWrapper<T>> {
    return request<T>("post", path, queryParams, body, security, config);
  },
  putRequest<T>(
    path: string,
    queryParams?: Record<string, any>,
    body?: unknown,
    security?: unknown,
    config?: RequestOverrides,
  ): Promise<ResponseWrapper<T>> {
    return request<T>("put", path, queryParams, body, security, config);
  },
  deleteRequest<T>(
    path: string,
    queryParams?: Record<string, any>,
    body?: unknown,
    security?: unknown,
    config?: RequestOverrides,
  ): Promise<ResponseWrapper<T>> {
    return request<T>("delete", path, queryParams, body, security, config);
  },
  patchRequest<T>(
    path: string,
    queryParams?: Record<string, any>,
    body?: unknown,
    security?: unknown,
    config?: RequestOverrides,
  ): Promise<ResponseWrapper<T>> {
    return request<T>("patch", path, queryParams, body, security, config);
  },
  headRequest<T>(
    path: string,
    queryParams?: Record<string, any>,
    body?: unknown,
    security?: unknown,
    config?: RequestOverrides,
  ): Promise<ResponseWrapper<T>> {
    return request<T>("head", path, queryParams, body, security, config);
  },
};
"#;
